//! Terminal output for bracket color markup.
//!
//! [`Console`] parses markup such as `[red]error:[/red] file not found` and
//! writes it with ANSI foreground colors through crossterm, restoring the
//! previous color whenever a tag's region ends.

pub mod error;
pub mod log_init;
pub mod render;

pub use error::{ConsoleError, Result};
pub use log_init::init_logger;
pub use render::{Console, Foreground, to_crossterm};

// Re-export the log crate so users can use console::log::info!, etc.
pub use log;
