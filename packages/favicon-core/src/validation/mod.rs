pub mod color;
pub mod size;

pub use color::parse_hex_color;
pub use size::{validate_label, validate_size, validate_sizes};
