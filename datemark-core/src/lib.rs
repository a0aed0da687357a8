pub mod config;
pub mod error;
pub mod metadata;
pub mod orientation;
pub mod pipeline;
pub mod watermark;

pub use config::{Position, WatermarkColor, WatermarkConfig};
pub use error::WatermarkError;
