//! Usage command handlers.

mod process_video;

pub use process_video::{ProcessVideoCommand, ProcessVideoHandler, ProcessVideoResult};
