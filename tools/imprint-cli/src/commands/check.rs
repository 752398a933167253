//! Check font availability and configuration.

use imprint_common::config::AppConfig;
use imprint_compose_core::FontStore;

pub fn run() -> anyhow::Result<()> {
    println!("Imprint System Check");
    println!("{}", "=".repeat(50));

    let config = AppConfig::load();

    // Font
    let font_ok = match FontStore::from_config(config.font_path.as_deref()) {
        Ok(fonts) => {
            println!("[OK] Font: {}", fonts.source().display());
            true
        }
        Err(e) => {
            println!("[WARN] Font: {e}");
            println!("       Set font_path in the config or install DejaVu Sans");
            false
        }
    };

    // Configuration
    match &config.font_path {
        Some(path) => println!("[OK] Configured font path: {}", path.display()),
        None => println!("[OK] Font discovery: system locations"),
    }
    println!("[OK] JPEG quality: {}", config.jpeg_quality);
    println!(
        "[OK] Watermark defaults: {}px, opacity {}, anchor {}",
        config.watermark.font_size, config.watermark.opacity, config.watermark.anchor
    );

    println!();
    if font_ok {
        println!("All checks passed. Imprint is ready.");
    } else {
        println!("No usable font was found. Exports will fail until one is configured.");
    }
    Ok(())
}
