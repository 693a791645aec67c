pub mod constants;
pub mod errors;
pub mod ico;
pub mod raster;
pub mod validation;

// 公開API
pub use constants::{FAVICON_SIZES, MAX_ICO_DIMENSION};
pub use errors::{FaviconError, IcoError, RenderError, ValidationError};
pub use ico::{IcoDirectoryEntry, IcoHeader, ImageFrame, build_ico, frame_payloads, read_directory};
pub use raster::{GlyphRenderer, GlyphStyle, SquareRenderer, build_favicon, encode_png, render_glyph};
pub use validation::{parse_hex_color, validate_label, validate_size, validate_sizes};
