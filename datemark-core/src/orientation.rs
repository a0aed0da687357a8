use image::DynamicImage;

/// Rotate a decoded photo upright according to its EXIF orientation code.
///
/// Handled codes:
/// 1 = upright, 3 = rotated 180°, 6 = rotated 90° CW, 8 = rotated 270° CW.
/// Mirrored codes (2/4/5/7) and out-of-range values pass through unchanged.
pub fn normalize(img: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        3 => img.rotate180(),
        6 => img.rotate90(),
        8 => img.rotate270(),
        _ => img,
    }
}
