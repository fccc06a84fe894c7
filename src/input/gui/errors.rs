use std::error::Error;
use std::fmt;

use crate::controllers::interactive::data::explorer_config::ConfigError;
use crate::core::data::pixel_field::PixelFieldError;

#[derive(Debug)]
pub enum GuiError {
    Config(ConfigError),
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
    Surface(pixels::Error),
    Frame(PixelFieldError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {}", err),
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Surface(err) => write!(f, "pixels surface error: {}", err),
            Self::Frame(err) => write!(f, "failed to copy frame: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Frame(err) => Some(err),
        }
    }
}

impl From<ConfigError> for GuiError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<winit::error::EventLoopError> for GuiError {
    fn from(err: winit::error::EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<winit::error::OsError> for GuiError {
    fn from(err: winit::error::OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

impl From<PixelFieldError> for GuiError {
    fn from(err: PixelFieldError) -> Self {
        Self::Frame(err)
    }
}
