use thiserror::Error;

/// Errors raised while watermarking a single photo.
///
/// `MissingCaptureDate` is the skip case: the photo decoded fine but carries
/// no EXIF capture date, so there is nothing to stamp.
#[derive(Debug, Error)]
pub enum WatermarkError {
    #[error("no EXIF capture date")]
    MissingCaptureDate,

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
