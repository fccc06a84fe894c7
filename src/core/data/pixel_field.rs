use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelFieldError {
    BoundsMismatch {
        viewport_size: usize,
        field_size: usize,
    },
    FrameSizeMismatch {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for PixelFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                viewport_size,
                field_size,
            } => {
                write!(
                    f,
                    "viewport size {} does not match field size {}",
                    viewport_size, field_size
                )
            }
            Self::FrameSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "frame length {} does not match expected rgba length {}",
                    actual, expected
                )
            }
        }
    }
}

impl Error for PixelFieldError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldPixel {
    pub point: Point,
    pub colour: Colour,
}

/// The coloured output of one evaluation pass, one entry per viewport pixel in
/// row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelField {
    viewport: Viewport,
    pixels: Vec<FieldPixel>,
}

impl PixelField {
    pub fn from_pixels(
        viewport: Viewport,
        pixels: Vec<FieldPixel>,
    ) -> Result<Self, PixelFieldError> {
        if viewport.size() != pixels.len() {
            return Err(PixelFieldError::BoundsMismatch {
                viewport_size: viewport.size(),
                field_size: pixels.len(),
            });
        }

        Ok(Self { viewport, pixels })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[must_use]
    pub fn pixels(&self) -> &[FieldPixel] {
        &self.pixels
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldPixel> {
        self.pixels.iter()
    }

    #[must_use]
    pub fn colour_at(&self, point: Point) -> Option<Colour> {
        if !self.viewport.contains_point(point) {
            return None;
        }

        let index = point.y as usize * self.viewport.width() as usize + point.x as usize;
        self.pixels.get(index).map(|pixel| pixel.colour)
    }

    /// Copies the field into an RGBA8 frame of exactly `width * height * 4` bytes.
    pub fn write_rgba(&self, frame: &mut [u8]) -> Result<(), PixelFieldError> {
        let expected = self.pixels.len() * RGBA_BYTES_PER_PIXEL;

        if frame.len() != expected {
            return Err(PixelFieldError::FrameSizeMismatch {
                expected,
                actual: frame.len(),
            });
        }

        for (pixel, dst) in self
            .pixels
            .iter()
            .zip(frame.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
        {
            dst[0] = pixel.colour.r;
            dst[1] = pixel.colour.g;
            dst[2] = pixel.colour.b;
            dst[3] = 255;
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a PixelField {
    type Item = &'a FieldPixel;
    type IntoIter = std::slice::Iter<'a, FieldPixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}
