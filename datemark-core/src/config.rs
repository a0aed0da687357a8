use image::Rgba;

/// Run-wide watermark settings, read once before the batch loop and shared
/// read-only by every photo job.
#[derive(Debug, Clone)]
pub struct WatermarkConfig {
    pub color: WatermarkColor,
    pub position: Position,
    /// Fixed stamp size in pixels; `None` scales with each photo.
    pub font_size: Option<u32>,
}

/// The five recognized stamp colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatermarkColor {
    White,
    Black,
    Red,
    Green,
    Blue,
}

impl WatermarkColor {
    /// Case-insensitive token parse. Anything unrecognized is white.
    pub fn parse(token: &str) -> Self {
        match token.trim().to_ascii_uppercase().as_str() {
            "WHITE" => Self::White,
            "BLACK" => Self::Black,
            "RED" => Self::Red,
            "GREEN" => Self::Green,
            "BLUE" => Self::Blue,
            _ => Self::White,
        }
    }

    pub fn rgba(self) -> Rgba<u8> {
        match self {
            Self::White => Rgba([255, 255, 255, 255]),
            Self::Black => Rgba([0, 0, 0, 255]),
            Self::Red => Rgba([255, 0, 0, 255]),
            Self::Green => Rgba([0, 255, 0, 255]),
            Self::Blue => Rgba([0, 0, 255, 255]),
        }
    }
}

/// Where the stamp lands on the photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    TopLeft,
    Center,
    BottomRight,
}

impl Position {
    /// Case-insensitive token parse. Anything unrecognized is bottom-right.
    pub fn parse(token: &str) -> Self {
        match token.trim().to_ascii_uppercase().as_str() {
            "TOP_LEFT" => Self::TopLeft,
            "CENTER" => Self::Center,
            "BOTTOM_RIGHT" => Self::BottomRight,
            _ => Self::BottomRight,
        }
    }
}
