pub mod compute_escape_field;
pub mod compute_escape_field_per_point;
mod working_set;
