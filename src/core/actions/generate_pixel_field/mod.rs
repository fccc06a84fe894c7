pub mod generate_pixel_field;
pub mod ports;
