use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::debug;

use crate::config::WatermarkConfig;
use crate::error::WatermarkError;
use crate::{metadata, orientation, watermark};

/// Watermark a single photo file: one EXIF pass, orientation fix, date
/// stamp, re-encode under `output`.
pub fn process_photo(
    input: &Path,
    output: &Path,
    config: &WatermarkConfig,
) -> Result<(), WatermarkError> {
    let meta = metadata::read(input);

    let img = image::open(input)?;
    let code = meta.orientation.unwrap_or_else(|| {
        debug!(photo = %input.display(), "no EXIF orientation, assuming upright");
        1
    });
    let img = orientation::normalize(img, code);

    let date = meta.capture_date.ok_or(WatermarkError::MissingCaptureDate)?;

    let stamped = watermark_image(img, &date, config);
    save(stamped, output)
}

/// Stamp an already-decoded, already-upright photo.
pub fn watermark_image(img: DynamicImage, date: &str, config: &WatermarkConfig) -> RgbaImage {
    let mut canvas = img.to_rgba8();
    watermark::draw(&mut canvas, date, config);
    canvas
}

/// Encode by output extension only: `.png` (any case) is PNG, everything
/// else is JPEG, even when the decoded bytes came from the other codec.
pub fn output_format(path: &Path) -> ImageFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => ImageFormat::Png,
        _ => ImageFormat::Jpeg,
    }
}

pub fn save(canvas: RgbaImage, path: &Path) -> Result<(), WatermarkError> {
    match output_format(path) {
        ImageFormat::Png => canvas.save_with_format(path, ImageFormat::Png)?,
        // the JPEG encoder rejects alpha
        _ => DynamicImage::ImageRgba8(canvas)
            .to_rgb8()
            .save_with_format(path, ImageFormat::Jpeg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Position, WatermarkColor};

    fn test_config() -> WatermarkConfig {
        WatermarkConfig {
            color: WatermarkColor::Red,
            position: Position::Center,
            font_size: None,
        }
    }

    #[test]
    fn test_output_format_by_extension() {
        assert_eq!(output_format(Path::new("a.png")), ImageFormat::Png);
        assert_eq!(output_format(Path::new("A.PNG")), ImageFormat::Png);
        assert_eq!(output_format(Path::new("b.jpg")), ImageFormat::Jpeg);
        assert_eq!(output_format(Path::new("c.JPEG")), ImageFormat::Jpeg);
    }

    #[test]
    fn test_missing_capture_date_writes_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("no-date.png");
        RgbaImage::new(32, 32).save(&input).unwrap();
        let output = dir.path().join("out").join("no-date.png");
        std::fs::create_dir_all(output.parent().unwrap()).unwrap();

        let err = process_photo(&input, &output, &test_config()).unwrap_err();
        assert!(matches!(err, WatermarkError::MissingCaptureDate));
        assert!(!output.exists());
    }

    #[test]
    fn test_unreadable_input_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("junk.jpg");
        std::fs::write(&input, b"this is not a jpeg").unwrap();
        let output = dir.path().join("junk-out.jpg");

        let err = process_photo(&input, &output, &test_config()).unwrap_err();
        assert!(matches!(err, WatermarkError::Image(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_watermark_image_stamps_and_keeps_dimensions() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            200,
            100,
            image::Rgba([0, 0, 0, 255]),
        ));
        let stamped = watermark_image(img, "2023-06-01", &test_config());
        assert_eq!(stamped.dimensions(), (200, 100));
        assert!(stamped.pixels().any(|p| p[0] > 0));
    }

    #[test]
    fn test_save_honors_png_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.PNG");
        save(RgbaImage::new(16, 16), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_save_defaults_to_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.jpg");
        save(RgbaImage::new(16, 16), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
    }
}
