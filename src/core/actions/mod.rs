pub mod cancellation;
pub mod compute_escape_field;
pub mod generate_grid;
pub mod generate_pixel_buffer;
pub mod progress;
