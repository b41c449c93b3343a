use crate::model::Atlas;
use serde_json::{json, Value};

/// Serialize the atlas as a JSON object `{ image, width, height, regions, meta }`.
/// Suitable for generic tooling and simple consumption.
pub fn to_json(atlas: &Atlas, image_name: &str) -> Value {
    let regions: Vec<Value> = atlas
        .regions
        .iter()
        .map(|r| {
            let mut v = json!({
                "id": r.key,
                "x": r.frame.x,
                "y": r.frame.y,
                "width": r.frame.w,
                "height": r.frame.h,
            });
            if let Some(np) = &r.nine_patch {
                v["ninePatch"] = json!({
                    "left": np.left,
                    "top": np.top,
                    "right": np.right,
                    "bottom": np.bottom,
                });
            }
            v
        })
        .collect();
    json!({
        "image": image_name,
        "width": atlas.width,
        "height": atlas.height,
        "regions": regions,
        "meta": &atlas.meta,
    })
}

/// Build the XML manifest (`.xmat` dialect): a `TextureAtlas` root referencing
/// the atlas image by filename, with one `TextureRegion` element per plain
/// region and one `NinePatchRegion` element per region carrying insets.
pub fn to_xml(atlas: &Atlas, image_name: &str) -> String {
    let mut s = String::new();
    s.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    s.push_str(&format!(
        "<TextureAtlas Image=\"{}\">\n",
        xml_escape(image_name)
    ));
    for r in &atlas.regions {
        match &r.nine_patch {
            Some(np) => {
                s.push_str(&format!(
                    "  <NinePatchRegion Id=\"{}\" Left=\"{}\" Top=\"{}\" Width=\"{}\" Height=\"{}\" NinePatchLeft=\"{}\" NinePatchTop=\"{}\" NinePatchRight=\"{}\" NinePatchBottom=\"{}\" />\n",
                    xml_escape(&r.key),
                    r.frame.x,
                    r.frame.y,
                    r.frame.w,
                    r.frame.h,
                    np.left,
                    np.top,
                    np.right,
                    np.bottom,
                ));
            }
            None => {
                s.push_str(&format!(
                    "  <TextureRegion Id=\"{}\" Left=\"{}\" Top=\"{}\" Width=\"{}\" Height=\"{}\" />\n",
                    xml_escape(&r.key),
                    r.frame.x,
                    r.frame.y,
                    r.frame.w,
                    r.frame.h,
                ));
            }
        }
    }
    s.push_str("</TextureAtlas>\n");
    s
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
