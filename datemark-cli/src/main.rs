use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context};
use datemark_core::pipeline::process_photo;
use datemark_core::{Position, WatermarkColor, WatermarkConfig, WatermarkError};
use tracing::info;

/// Photos are read from a fixed directory relative to the working directory;
/// results land in a subdirectory next to them.
const PHOTO_DIR: &str = "src/photo";
const WATERMARK_DIR: &str = "watermark";

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Direct children of `dir` that look like photos. Sub-directories are not
/// recursed into; an unlistable directory is treated as empty, not an error.
fn list_photos(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .filter_map(|entry| entry.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_image_file(p))
        .collect()
}

fn prompt(question: &str) -> anyhow::Result<String> {
    print!("{question}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// One-shot interactive configuration, shared read-only by every photo in
/// the run. A blank font size means "scale with each photo"; anything else
/// must parse as a positive integer or the run aborts before touching files.
fn read_config() -> anyhow::Result<WatermarkConfig> {
    let raw = prompt("Enter font size (blank = automatic): ")?;
    let font_size = if raw.is_empty() {
        None
    } else {
        let size: u32 = raw
            .parse()
            .with_context(|| format!("font size must be a positive integer, got '{raw}'"))?;
        ensure!(size > 0, "font size must be a positive integer, got '{raw}'");
        Some(size)
    };

    let color = WatermarkColor::parse(&prompt("Enter color (WHITE, BLACK, RED, GREEN, BLUE): ")?);
    let position = Position::parse(&prompt("Enter position (TOP_LEFT, CENTER, BOTTOM_RIGHT): ")?);

    Ok(WatermarkConfig {
        color,
        position,
        font_size,
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let input_dir = PathBuf::from(PHOTO_DIR);
    let output_dir = input_dir.join(WATERMARK_DIR);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    let config = read_config()?;

    let photos = list_photos(&input_dir);
    info!(count = photos.len(), dir = PHOTO_DIR, "scanned photo directory");

    for path in &photos {
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let name = file_name.to_string_lossy();
        let out_path = output_dir.join(file_name);

        match process_photo(path, &out_path, &config) {
            Ok(()) => println!("Watermarked {} -> {}", name, out_path.display()),
            Err(WatermarkError::MissingCaptureDate) => {
                eprintln!("No EXIF date found for {}. Skipping.", name);
            }
            Err(e) => eprintln!("Error processing {}: {}", name, e),
        }
    }

    let summary_dir = fs::canonicalize(&output_dir).unwrap_or(output_dir);
    println!(
        "Processing complete. Watermarked images saved in: {}",
        summary_dir.display()
    );
    Ok(())
}
