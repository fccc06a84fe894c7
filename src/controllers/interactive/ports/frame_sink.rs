use crate::controllers::interactive::data::frame_data::FrameData;

/// Receives every frame the controller evaluates, in order.
pub trait FrameSink {
    fn present(&mut self, frame: FrameData);
}
