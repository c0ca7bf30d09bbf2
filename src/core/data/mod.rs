pub mod colour;
pub mod complex;
pub mod escape_field;
pub mod grid_shape;
pub mod pixel_buffer;
pub mod region;
