pub mod generate_grid;
pub mod sample_grid;
