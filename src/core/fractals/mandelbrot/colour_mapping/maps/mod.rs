pub mod fire_gradient;
pub mod grayscale;
