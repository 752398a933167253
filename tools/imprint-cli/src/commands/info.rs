//! Show image and resize information.

use std::path::PathBuf;

use imprint_editor_model::image_source::ImageSource;
use imprint_editor_model::render_target::RenderTarget;

pub async fn run(path: PathBuf, json: bool) -> anyhow::Result<()> {
    let source = ImageSource::load(&path).await?;
    let (width, height) = source.natural_dimensions();

    if json {
        let presets: Vec<_> = [25u32, 50, 75, 100]
            .iter()
            .map(|&percent| {
                let target = RenderTarget::from_scale((width, height), percent);
                serde_json::json!({
                    "percent": percent,
                    "width": target.width(),
                    "height": target.height(),
                })
            })
            .collect();
        let info = serde_json::json!({
            "path": path.display().to_string(),
            "width": width,
            "height": height,
            "aspect_ratio": width as f64 / height as f64,
            "presets": presets,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Image: {}", path.display());
    println!("  Dimensions: {width}x{height}");
    println!("  Aspect ratio: {:.4}", width as f64 / height as f64);
    println!("  Scale presets:");
    for percent in [25u32, 50, 75, 100] {
        let target = RenderTarget::from_scale((width, height), percent);
        println!("    {percent:>3}%: {}x{}", target.width(), target.height());
    }
    Ok(())
}
