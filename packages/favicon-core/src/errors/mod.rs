pub mod types;

pub use types::{FaviconError, IcoError, RenderError, ValidationError};
