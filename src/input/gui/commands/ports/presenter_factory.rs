use winit::window::Window;
use crate::core::data::viewport::Viewport;
use crate::input::gui::{errors::GuiError, ports::presenter::GuiPresenterPort};

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(&self, window: &'static Window, viewport: Viewport) -> Result<T, GuiError>;
}
