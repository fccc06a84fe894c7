use crate::core::data::viewport::Viewport;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Computes `algorithm` for every pixel of `viewport` on the calling thread, in
/// row-major order.
pub fn generate_fractal<Alg: FractalAlgorithm>(viewport: Viewport, algorithm: &Alg) -> Result<Vec<Alg::Success>, Alg::Failure>
{
    viewport
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
