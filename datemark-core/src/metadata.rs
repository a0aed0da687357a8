use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exif::{In, Tag, Value};

/// The two EXIF lookups the watermarker needs, read in one pass.
///
/// Each field fails independently: a file with no readable EXIF container
/// yields both as `None`.
#[derive(Debug, Default, Clone)]
pub struct PhotoMeta {
    /// Orientation code (1/3/6/8 handled downstream).
    pub orientation: Option<u32>,
    /// Capture date from DateTimeOriginal, formatted `YYYY-MM-DD`.
    pub capture_date: Option<String>,
}

pub fn read(path: &Path) -> PhotoMeta {
    let Some(exif) = read_container(path) else {
        return PhotoMeta::default();
    };
    PhotoMeta {
        orientation: exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|f| f.value.get_uint(0)),
        capture_date: exif
            .get_field(Tag::DateTimeOriginal, In::PRIMARY)
            .and_then(|f| capture_date(&f.value)),
    }
}

fn read_container(path: &Path) -> Option<exif::Exif> {
    let file = File::open(path).ok()?;
    let mut bufreader = BufReader::new(file);
    exif::Reader::new().read_from_container(&mut bufreader).ok()
}

/// Format a DateTimeOriginal value (ASCII `YYYY:MM:DD HH:MM:SS`) as `YYYY-MM-DD`.
fn capture_date(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(ref vec) if !vec.is_empty() => {
            let dt = exif::DateTime::from_ascii(&vec[0]).ok()?;
            Some(format!("{:04}-{:02}-{:02}", dt.year, dt.month, dt.day))
        }
        _ => None,
    }
}
