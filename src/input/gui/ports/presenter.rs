use winit::dpi::PhysicalPosition;

use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::core::data::point::Point;
use crate::input::gui::errors::GuiError;

/// A window-backed frame sink.
pub trait GuiPresenterPort: FrameSink {
    /// Draws the most recently presented frame to the window.
    fn render(&mut self) -> Result<(), GuiError>;

    /// Converts a physical window position to a framebuffer pixel. Positions outside
    /// the framebuffer keep their signed coordinates.
    fn window_pos_to_pixel(&self, position: PhysicalPosition<f64>) -> Point;
}
