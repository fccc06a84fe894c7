use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

/// Iteration and colouring settings for one evaluation pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationParams {
    max_iterations: u32,
    escape_radius: f64,
    colour_base: [u8; 3],
}

impl IterationParams {
    pub fn new(max_iterations: u32, colour_base: [u8; 3]) -> Result<Self, MandelbrotError> {
        Self::with_escape_radius(max_iterations, DEFAULT_ESCAPE_RADIUS, colour_base)
    }

    pub fn with_escape_radius(
        max_iterations: u32,
        escape_radius: f64,
        colour_base: [u8; 3],
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if !(escape_radius > 0.0 && escape_radius.is_finite()) {
            return Err(MandelbrotError::InvalidEscapeRadius { escape_radius });
        }

        Ok(Self {
            max_iterations,
            escape_radius,
            colour_base,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }

    #[must_use]
    pub fn escape_radius_squared(&self) -> f64 {
        self.escape_radius * self.escape_radius
    }

    #[must_use]
    pub fn colour_base(&self) -> [u8; 3] {
        self.colour_base
    }
}
