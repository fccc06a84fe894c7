use std::error::Error;
use std::fmt;

use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::evaluator::EvaluationStrategy;
use crate::core::fractals::mandelbrot::params::{DEFAULT_ESCAPE_RADIUS, IterationParams};
use crate::core::view::view_state::{ViewState, ViewStateError};

const DEFAULT_WIDTH: u32 = 900;
const DEFAULT_HEIGHT: u32 = 700;
const DEFAULT_INITIAL_SCALE: f64 = 400.0;
const DEFAULT_ZOOM_SPEED: f64 = 200.0;
const DEFAULT_MAX_ITERATIONS: u32 = 42;
const DEFAULT_COLOUR_BASE: [u8; 3] = [0, 255, 0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    Viewport(ViewportError),
    ViewState(ViewStateError),
    Iteration(MandelbrotError),
    InvalidZoomSpeed { zoom_speed: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::ViewState(err) => write!(f, "invalid initial view: {}", err),
            Self::Iteration(err) => write!(f, "invalid iteration settings: {}", err),
            Self::InvalidZoomSpeed { zoom_speed } => {
                write!(f, "zoom speed must be a positive finite number, got {}", zoom_speed)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::ViewState(err) => Some(err),
            Self::Iteration(err) => Some(err),
            Self::InvalidZoomSpeed { .. } => None,
        }
    }
}

impl From<ViewportError> for ConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<ViewStateError> for ConfigError {
    fn from(err: ViewStateError) -> Self {
        Self::ViewState(err)
    }
}

impl From<MandelbrotError> for ConfigError {
    fn from(err: MandelbrotError) -> Self {
        Self::Iteration(err)
    }
}

/// Settings fixed at startup. There is no way to change them while running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub width: u32,
    pub height: u32,
    /// Pixels per unit distance in the complex plane for the first frame.
    pub initial_scale: f64,
    /// Base zoom step, also the smallest scale a zoom can reach.
    pub zoom_speed: f64,
    pub max_iterations: u32,
    pub escape_radius: f64,
    pub colour_base: [u8; 3],
    pub strategy: EvaluationStrategy,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            initial_scale: DEFAULT_INITIAL_SCALE,
            zoom_speed: DEFAULT_ZOOM_SPEED,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            colour_base: DEFAULT_COLOUR_BASE,
            strategy: EvaluationStrategy::default(),
        }
    }
}

impl ExplorerConfig {
    pub fn viewport(&self) -> Result<Viewport, ConfigError> {
        Ok(Viewport::new(self.width, self.height)?)
    }

    pub fn initial_view(&self) -> Result<ViewState, ConfigError> {
        Ok(ViewState::new(self.viewport()?, self.initial_scale)?)
    }

    pub fn iteration_params(&self) -> Result<IterationParams, ConfigError> {
        Ok(IterationParams::with_escape_radius(
            self.max_iterations,
            self.escape_radius,
            self.colour_base,
        )?)
    }

    pub fn validated_zoom_speed(&self) -> Result<f64, ConfigError> {
        if !(self.zoom_speed > 0.0 && self.zoom_speed.is_finite()) {
            return Err(ConfigError::InvalidZoomSpeed {
                zoom_speed: self.zoom_speed,
            });
        }

        Ok(self.zoom_speed)
    }
}
