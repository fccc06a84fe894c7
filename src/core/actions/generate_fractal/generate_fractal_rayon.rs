use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Generates fractal data with one rayon task per row.
///
/// Rows are collected in order and flattened, so the output is row-major and identical
/// to [`generate_fractal`](super::generate_fractal::generate_fractal).
pub fn generate_fractal_rayon<Alg>(
    viewport: Viewport,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let width = viewport.width() as i32;
    let height = viewport.height() as i32;

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..height)
        .into_par_iter()
        .map(|y| -> Result<Vec<Alg::Success>, Alg::Failure> {
            let mut row = Vec::with_capacity(width as usize);

            for x in 0..width {
                row.push(algorithm.compute(Point { x, y })?);
            }

            Ok(row)
        })
        .collect();

    rows.map(|rows| rows.into_iter().flatten().collect())
}
