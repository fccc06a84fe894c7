use std::convert::Infallible;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::view::view_state::ViewState;
use crate::core::fractals::mandelbrot::params::IterationParams;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Escape-time evaluation of `z <- z² + c` for the pixels of a view.
#[derive(Debug, Clone, Copy)]
pub struct MandelbrotAlgorithm {
    view: ViewState,
    max_iterations: u32,
    escape_radius_squared: f64,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        Ok(self.escape_count(self.view.map_point_to_complex(pixel)))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(view: ViewState, params: &IterationParams) -> Self {
        Self {
            view,
            max_iterations: params.max_iterations(),
            escape_radius_squared: params.escape_radius_squared(),
        }
    }

    /// Index `n` of the first orbit point `z_n` outside the escape radius, or
    /// `max_iterations` if the orbit stays bounded that long.
    #[must_use]
    pub fn escape_count(&self, c: Complex) -> u32 {
        let mut z = Complex::ZERO;

        for iteration in 1..=self.max_iterations {
            z = z.square() + c;
            if z.magnitude_squared() > self.escape_radius_squared {
                return iteration;
            }
        }

        self.max_iterations
    }
}
