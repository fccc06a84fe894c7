use std::time::Instant;

use log::debug;

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_pixel_field::generate_pixel_field::{
    GeneratePixelFieldError, generate_pixel_field,
};
use crate::core::data::pixel_field::PixelField;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::BandedTintColourMap;
use crate::core::fractals::mandelbrot::params::IterationParams;
use crate::core::view::view_state::ViewState;

/// How the escape counts of a field are scheduled. Both strategies produce the same
/// field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationStrategy {
    #[default]
    Sequential,
    RowParallel,
}

/// Produces the complete pixel field for a view.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldEvaluator {
    strategy: EvaluationStrategy,
}

impl FieldEvaluator {
    #[must_use]
    pub fn new(strategy: EvaluationStrategy) -> Self {
        Self { strategy }
    }

    #[must_use]
    pub fn strategy(&self) -> EvaluationStrategy {
        self.strategy
    }

    /// Evaluates every pixel of `viewport` in row-major order. Pure: identical inputs
    /// give identical fields.
    #[must_use]
    pub fn evaluate(
        &self,
        viewport: Viewport,
        view: &ViewState,
        params: &IterationParams,
    ) -> PixelField {
        let start = Instant::now();
        let algorithm = MandelbrotAlgorithm::new(*view, params);

        let escape_counts = match self.strategy {
            EvaluationStrategy::Sequential => generate_fractal(viewport, &algorithm),
            EvaluationStrategy::RowParallel => generate_fractal_rayon(viewport, &algorithm),
        };
        let escape_counts = match escape_counts {
            Ok(counts) => counts,
            Err(never) => match never {},
        };

        let colour_map = BandedTintColourMap::new(params);
        let field = match generate_pixel_field(escape_counts, &colour_map, viewport) {
            Ok(field) => field,
            Err(GeneratePixelFieldError::ColourMap(never)) => match never {},
            Err(GeneratePixelFieldError::PixelField(err)) => {
                // One escape count is produced per viewport pixel
                unreachable!("escape counts do not cover the viewport: {err}")
            }
        };

        debug!(
            "evaluated {}x{} field ({:?}, {} iterations) in {:?}",
            viewport.width(),
            viewport.height(),
            self.strategy,
            params.max_iterations(),
            start.elapsed()
        );

        field
    }
}
