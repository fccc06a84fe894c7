use crate::core::actions::generate_pixel_field::ports::colour_map::ColourMap;
use crate::core::data::pixel_field::{FieldPixel, PixelField, PixelFieldError};
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GeneratePixelFieldError<E> {
    ColourMap(E),
    PixelField(PixelFieldError),
}

impl<E: fmt::Display> fmt::Display for GeneratePixelFieldError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelField(err) => write!(f, "pixel field error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GeneratePixelFieldError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelField(err) => Some(err),
        }
    }
}

/// Colours row-major `input` values and pairs them with their viewport pixels.
pub fn generate_pixel_field<T, CMap>(
    input: Vec<T>,
    mapper: &CMap,
    viewport: Viewport,
) -> Result<PixelField, GeneratePixelFieldError<CMap::Failure>>
where
    CMap: ColourMap<T = T>,
{
    if input.len() != viewport.size() {
        return Err(GeneratePixelFieldError::PixelField(
            PixelFieldError::BoundsMismatch {
                viewport_size: viewport.size(),
                field_size: input.len(),
            },
        ));
    }

    let mut pixels = Vec::with_capacity(input.len());

    for (point, value) in viewport.points().zip(input) {
        let colour = mapper.map(value).map_err(GeneratePixelFieldError::ColourMap)?;
        pixels.push(FieldPixel { point, colour });
    }

    PixelField::from_pixels(viewport, pixels).map_err(GeneratePixelFieldError::PixelField)
}
