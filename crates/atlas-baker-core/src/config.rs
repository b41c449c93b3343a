use serde::{Deserialize, Serialize};

/// Packing configuration.
///
/// The canvas is always square; it starts at `seed_size` and doubles until
/// every input fits, so there is no maximum-dimension knob here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasConfig {
    /// Side length of the initial square canvas.
    #[serde(default = "default_seed_size")]
    pub seed_size: u32,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            seed_size: default_seed_size(),
        }
    }
}

impl AtlasConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::AtlasError;

        if self.seed_size == 0 {
            return Err(AtlasError::InvalidConfig(
                "seed_size must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Create a fluent builder for `AtlasConfig`.
    pub fn builder() -> AtlasConfigBuilder {
        AtlasConfigBuilder::new()
    }
}

fn default_seed_size() -> u32 {
    256
}

/// Builder for `AtlasConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct AtlasConfigBuilder {
    cfg: AtlasConfig,
}

impl AtlasConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: AtlasConfig::default(),
        }
    }
    pub fn seed_size(mut self, v: u32) -> Self {
        self.cfg.seed_size = v;
        self
    }
    pub fn build(self) -> AtlasConfig {
        self.cfg
    }
}
