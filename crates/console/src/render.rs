//! Rendering of markup trees to a terminal.
//!
//! A [`Console`] walks a [`MarkupTree`] depth-first. Entering a tag switches
//! the foreground color; leaving it restores the color that was active
//! before, so nested and sibling regions never leak into each other.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Color, SetForegroundColor};
use log::debug;

use markup::{ConsoleColor, MarkupTree, NameRegistry, NodeKind, WalkEvent, default_registry};

use crate::error::Result;

/// A registry attribute that can be shown as a terminal foreground color.
pub trait Foreground {
    fn foreground(&self) -> Color;
}

impl Foreground for ConsoleColor {
    fn foreground(&self) -> Color {
        to_crossterm(*self)
    }
}

impl Foreground for Color {
    fn foreground(&self) -> Color {
        *self
    }
}

/// Map a console color onto the matching crossterm ANSI color.
pub fn to_crossterm(color: ConsoleColor) -> Color {
    match color {
        ConsoleColor::Black => Color::Black,
        ConsoleColor::DarkBlue => Color::DarkBlue,
        ConsoleColor::DarkGreen => Color::DarkGreen,
        ConsoleColor::DarkCyan => Color::DarkCyan,
        ConsoleColor::DarkRed => Color::DarkRed,
        ConsoleColor::DarkMagenta => Color::DarkMagenta,
        ConsoleColor::DarkYellow => Color::DarkYellow,
        ConsoleColor::Gray => Color::Grey,
        ConsoleColor::DarkGray => Color::DarkGrey,
        ConsoleColor::Blue => Color::Blue,
        ConsoleColor::Green => Color::Green,
        ConsoleColor::Cyan => Color::Cyan,
        ConsoleColor::Red => Color::Red,
        ConsoleColor::Magenta => Color::Magenta,
        ConsoleColor::Yellow => Color::Yellow,
        ConsoleColor::White => Color::White,
    }
}

/// What leaving a tag has to undo.
enum Scope {
    /// The tag had no color; nothing changed.
    Transparent,
    /// The tag set a color; restore this one (`None` is the terminal default).
    Restore(Option<Color>),
}

/// Writes color markup to a terminal or any other byte sink.
///
/// # Examples
///
/// ```
/// use console::Console;
///
/// let mut console = Console::new(Vec::new()).with_colors(false);
/// console.write("[red]Hello[/red] World").unwrap();
/// assert_eq!(console.into_inner(), b"Hello World");
/// ```
pub struct Console<W: Write> {
    out: W,
    colors: bool,
}

impl<W: Write> Console<W> {
    /// Create a console that emits color escape codes.
    pub fn new(out: W) -> Self {
        Self { out, colors: true }
    }

    /// Enable or disable color output. When disabled only text is written.
    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    pub fn colors_enabled(&self) -> bool {
        self.colors
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Parse `markup` with the console color names and render it.
    pub fn write(&mut self, text: &str) -> Result<()> {
        let tree = markup::parse(text);
        self.render(&tree, default_registry())
    }

    /// Like [`write`](Self::write), followed by a newline.
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }

    /// Render an already parsed tree.
    ///
    /// Tag names are resolved in `registry`; a tag without an entry there
    /// renders its children in the surrounding color. The terminal color is
    /// back at its default when this returns successfully.
    pub fn render<A: Foreground>(
        &mut self,
        tree: &MarkupTree,
        registry: &NameRegistry<A>,
    ) -> Result<()> {
        debug!("rendering markup tree with {} nodes", tree.node_count());

        let mut scopes: Vec<Scope> = Vec::new();
        let mut current: Option<Color> = None;

        for event in tree.walk() {
            match event {
                WalkEvent::Enter(node) => match node.kind() {
                    NodeKind::Text(text) => self.out.write_all(text.as_bytes())?,
                    NodeKind::Tag(tag) => match registry.get(tag) {
                        Some(attribute) => {
                            let color = attribute.foreground();
                            scopes.push(Scope::Restore(current));
                            self.set_foreground(Some(color))?;
                            current = Some(color);
                        }
                        None => scopes.push(Scope::Transparent),
                    },
                    NodeKind::Root => {}
                },
                WalkEvent::Leave(node) => {
                    if !node.is_tag() {
                        continue;
                    }
                    if let Some(Scope::Restore(previous)) = scopes.pop() {
                        self.set_foreground(previous)?;
                        current = previous;
                    }
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }

    fn set_foreground(&mut self, color: Option<Color>) -> Result<()> {
        if self.colors {
            queue!(self.out, SetForegroundColor(color.unwrap_or(Color::Reset)))?;
        }
        Ok(())
    }
}
