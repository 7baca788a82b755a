//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_fg(Color::Green);
        skin.inline_code.set_bg(Color::Reset);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        if self.rich_enabled {
            for line in markdown.lines() {
                // Headers keep their hash marks, only tinted
                if line.starts_with('#') {
                    writeln!(out, "\x1b[36m{line}\x1b[0m")?;
                } else {
                    writeln!(out, "{}", self.skin.inline(line))?;
                }
            }
        } else {
            write!(out, "{markdown}")?;
        }
        out.flush()?;
        Ok(())
    }

    /// Clear the screen before a redraw. Plain output is append-only.
    pub fn clear(&self) -> Result<()> {
        if self.rich_enabled {
            let mut out = io::stdout().lock();
            write!(out, "\x1b[2J\x1b[H")?;
            out.flush()?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
