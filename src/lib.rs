//! Bracket color markup for console output.
//!
//! Write `[red]error:[/red] disk [yellow]almost[/yellow] full` and get colored
//! terminal text. Parsing lives in [`markup`], terminal output in [`console`].
//!
//! ```no_run
//! markup_color::write_line("[green]ok[/green] all checks passed").unwrap();
//! ```

use std::io;

pub use console::{self, Console, ConsoleError, Result};
pub use markup::{self, ConsoleColor, MarkupTree, NameRegistry, parse, parse_with};

/// Render markup to standard output.
pub fn write(text: &str) -> Result<()> {
    Console::new(io::stdout().lock()).write(text)
}

/// Render markup to standard output, followed by a newline.
pub fn write_line(text: &str) -> Result<()> {
    Console::new(io::stdout().lock()).write_line(text)
}
