use std::time::Duration;
use crate::core::data::pixel_field::PixelField;

#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_field: PixelField,
    pub render_duration: Duration,
}
