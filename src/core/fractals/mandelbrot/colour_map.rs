use crate::core::actions::generate_pixel_field::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::params::IterationParams;
use std::convert::Infallible;

const CHANNEL_MODULUS: u32 = 255;

/// Banded gradient tinted by a base colour.
///
/// Each channel is `(base + escape_count * base / max_iterations) mod 255`, computed in
/// integers with the product taken before the truncating division. No smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandedTintColourMap {
    max_iterations: u32,
    colour_base: [u8; 3],
}

impl ColourMap for BandedTintColourMap {
    type T = u32;
    type Failure = Infallible;

    fn map(&self, escape_count: u32) -> Result<Colour, Self::Failure> {
        let [r, g, b] = self.colour_base;

        Ok(Colour {
            r: self.channel(r, escape_count),
            g: self.channel(g, escape_count),
            b: self.channel(b, escape_count),
        })
    }
}

impl BandedTintColourMap {
    #[must_use]
    pub fn new(params: &IterationParams) -> Self {
        Self {
            max_iterations: params.max_iterations(),
            colour_base: params.colour_base(),
        }
    }

    fn channel(&self, base: u8, escape_count: u32) -> u8 {
        let base = u64::from(base);
        let band = u64::from(escape_count) * base / u64::from(self.max_iterations);

        ((base + band) % u64::from(CHANNEL_MODULUS)) as u8
    }
}
