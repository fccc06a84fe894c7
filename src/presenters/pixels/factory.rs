use winit::window::Window;

use crate::core::data::viewport::Viewport;
use crate::input::gui::{commands::ports::presenter_factory::GuiPresenterFactoryPort, errors::GuiError};
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory {}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(&self, window: &'static Window, viewport: Viewport) -> Result<PixelsPresenter, GuiError> {
        PixelsPresenter::new(window, viewport)
    }
}

impl PixelsPresenterFactory {
    pub fn new() -> Self {
        Self {}
    }
}
