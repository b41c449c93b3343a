use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use atlas_baker_core::{pack_images, AtlasConfig, InputImage};
use clap::{ArgAction, Parser};
use globset::{Glob, GlobSetBuilder};
use image::{DynamicImage, ImageFormat, ImageReader};
use tracing::info;
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(
    name = "atlas-baker",
    about = "Pack a folder of images into one texture atlas plus a region manifest",
    version,
    author
)]
struct Cli {
    // Input/Output
    /// Input directory containing the source images
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output atlas image; the extension selects the encoding (png/jpg/bmp/tga)
    #[arg(help_heading = "Input/Output")]
    output: PathBuf,
    /// Manifest format: xml | json
    #[arg(long, default_value = "xml", value_parser = ["xml", "json"], help_heading = "Input/Output")]
    metadata: String,
    /// Include patterns (glob). If set, only files matching any pattern are considered
    #[arg(long, help_heading = "Input/Output")]
    include: Vec<String>,
    /// Exclude patterns (glob). Files matching any pattern will be ignored
    #[arg(long, help_heading = "Input/Output")]
    exclude: Vec<String>,

    // Layout
    /// Side length of the initial square canvas (doubles until everything fits)
    #[arg(long, default_value_t = 256, help_heading = "Layout")]
    seed_size: u32,

    // Logging/UX
    /// Show a progress bar while loading (disable with --progress=false or --quiet)
    #[arg(long, default_value_t = true, action = ArgAction::Set, help_heading = "Logging/UX")]
    progress: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, help_heading = "Logging/UX")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    run(&cli, cli.progress && !cli.quiet)
}

fn run(cli: &Cli, show_progress: bool) -> anyhow::Result<()> {
    let format = determine_output_format(&cli.output)?;

    let paths = gather_paths(&cli.input, &cli.include, &cli.exclude)?;
    if paths.is_empty() {
        anyhow::bail!("no image files found at {}", cli.input.display());
    }
    info!(count = paths.len(), input = %cli.input.display(), "found input images");

    let inputs = load_images_with_progress(&paths, show_progress)?;

    let cfg = AtlasConfig::builder().seed_size(cli.seed_size).build();
    let out = pack_images(inputs, cfg)?;

    // Render the manifest before touching the filesystem so a failed run
    // leaves neither output behind.
    let image_name = cli
        .output
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("atlas")
        .to_string();
    let (manifest_path, manifest) = match cli.metadata.as_str() {
        "json" => {
            let value = atlas_baker_core::to_json(&out.atlas, &image_name);
            (
                cli.output.with_extension("json"),
                serde_json::to_string_pretty(&value)?,
            )
        }
        _ => (
            cli.output.with_extension("xmat"),
            atlas_baker_core::to_xml(&out.atlas, &image_name),
        ),
    };

    write_output_image(&cli.output, format, out.rgba)?;
    info!(path = %cli.output.display(), width = out.atlas.width, height = out.atlas.height, "atlas image written");

    fs::write(&manifest_path, manifest)
        .with_context(|| format!("write {}", manifest_path.display()))?;
    info!(path = %manifest_path.display(), regions = out.atlas.regions.len(), "manifest written");

    info!(
        occupancy = format!("{:.2}%", out.atlas.occupancy() * 100.0),
        used_area = out.atlas.used_area(),
        total_area = out.atlas.total_area(),
        "stats"
    );
    Ok(())
}

/// Output encoding is selected by the output file's extension; a missing or
/// unrecognized extension is a configuration error, reported before any
/// input is read.
fn determine_output_format(output: &Path) -> anyhow::Result<ImageFormat> {
    let ext = output
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "output file {} lacks an extension; cannot determine output format",
                output.display()
            )
        })?;
    match ext.as_str() {
        "png" => Ok(ImageFormat::Png),
        "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
        "bmp" => Ok(ImageFormat::Bmp),
        "tga" => Ok(ImageFormat::Tga),
        other => anyhow::bail!("output format '{}' is not supported", other),
    }
}

fn write_output_image(
    path: &Path,
    format: ImageFormat,
    rgba: image::RgbaImage,
) -> anyhow::Result<()> {
    // JPEG has no alpha channel; flatten to RGB for it.
    let result = if format == ImageFormat::Jpeg {
        DynamicImage::ImageRgba8(rgba).to_rgb8().save_with_format(path, format)
    } else {
        rgba.save_with_format(path, format)
    };
    result.with_context(|| format!("write {}", path.display()))
}

fn gather_paths(
    path: &Path,
    include: &[String],
    exclude: &[String],
) -> anyhow::Result<Vec<PathBuf>> {
    let mut inc_set = None;
    if !include.is_empty() {
        let mut b = GlobSetBuilder::new();
        for pat in include {
            b.add(Glob::new(pat)?);
        }
        inc_set = Some(b.build()?);
    }
    let mut exc_set = None;
    if !exclude.is_empty() {
        let mut b = GlobSetBuilder::new();
        for pat in exclude {
            b.add(Glob::new(pat)?);
        }
        exc_set = Some(b.build()?);
    }
    let mut list: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(path)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let p = entry.path();
        if p.is_file() && !should_skip(p, inc_set.as_ref(), exc_set.as_ref()) && is_image(p) {
            list.push(p.to_path_buf());
        }
    }
    // Scan order is filesystem-dependent; sort so the packing layout is
    // reproducible across runs and machines.
    list.sort();
    Ok(list)
}

fn should_skip(
    p: &Path,
    include: Option<&globset::GlobSet>,
    exclude: Option<&globset::GlobSet>,
) -> bool {
    let s = p.to_string_lossy().replace('\\', "/");
    if let Some(ex) = exclude {
        if ex.is_match(&s) {
            return true;
        }
    }
    if let Some(inc) = include {
        if !inc.is_match(&s) {
            return true;
        }
    }
    false
}

fn is_image(p: &Path) -> bool {
    matches!(
        p.extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase()),
        Some(ext) if matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "bmp" | "tga" | "gif")
    )
}

fn load_images_with_progress(paths: &[PathBuf], progress: bool) -> anyhow::Result<Vec<InputImage>> {
    use indicatif::{ProgressBar, ProgressStyle};
    let bar = if progress {
        let b = ProgressBar::new(paths.len() as u64);
        b.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} loading {pos}/{len} [{elapsed_precise}] {wide_msg}",
            )
            .unwrap(),
        );
        Some(b)
    } else {
        None
    };
    let mut list = Vec::with_capacity(paths.len());
    for p in paths {
        let msg = p.file_name().and_then(|s| s.to_str()).unwrap_or("");
        if let Some(b) = &bar {
            b.set_message(msg.to_string());
        }
        // A single undecodable asset aborts the whole run; the atlas is
        // all-or-nothing.
        let img = load_image(p).with_context(|| format!("decode {}", p.display()))?;
        let key = p
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| p.to_string_lossy().replace('\\', "/"));
        list.push(InputImage { key, image: img });
        if let Some(b) = &bar {
            b.inc(1);
        }
    }
    if let Some(b) = &bar {
        b.finish_and_clear();
    }
    Ok(list)
}

fn load_image(p: &Path) -> anyhow::Result<DynamicImage> {
    let img = ImageReader::open(p)?.with_guessed_format()?.decode()?;
    Ok(img)
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
