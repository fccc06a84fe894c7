pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod pixel_field;
pub mod point;
pub mod viewport;
