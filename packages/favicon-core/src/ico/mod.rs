pub mod builder;
pub mod entry;
pub mod reader;

pub use builder::build_ico;
pub use entry::{IcoDirectoryEntry, IcoHeader, ImageFrame};
pub use reader::{frame_payloads, read_directory};
