mod controllers;
mod core;
mod input;
mod presenters;

pub use controllers::interactive::{
    ConfigError, ExplorerConfig, ExplorerController, FrameData, FrameSink, InputEvent,
    LoopControl, MouseButton,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::pixel_field::{FieldPixel, PixelField, PixelFieldError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::evaluator::{EvaluationStrategy, FieldEvaluator};
pub use crate::core::fractals::mandelbrot::params::IterationParams;
pub use crate::core::view::{ViewState, ViewStateError, ZoomDirection};

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, RunGuiCommand};
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
