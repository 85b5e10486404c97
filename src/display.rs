//! Terminal animation: repaints the simulation frame in place.
//!
//! Cursor and color control only; no simulation awareness.

use crate::grid::{EMPTY_GLYPH, GRASS_GLYPH};
use crate::lifeform::Species;
use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Repaints a block of terminal rows to animate the simulation
pub struct DynamicTerminal {
    rows: u16,
}

impl DynamicTerminal {
    /// Reserve `rows` lines at the bottom of the terminal
    pub fn new(rows: u16) -> io::Result<Self> {
        let mut out = io::stdout();
        for _ in 0..rows {
            queue!(out, Print("\n"))?;
        }
        out.flush()?;
        Ok(Self { rows })
    }

    /// Repaint the reserved block with the given lines
    pub fn render(&mut self, lines: &[String]) -> io::Result<()> {
        let mut out = io::stdout();
        write_frame(&mut out, lines, self.rows)?;
        out.flush()
    }
}

/// Move the cursor up over the previous frame and rewrite it
fn write_frame(out: &mut impl Write, lines: &[String], rows: u16) -> io::Result<()> {
    if rows > 0 {
        queue!(out, cursor::MoveUp(rows))?;
    }
    for line in lines {
        queue!(out, Clear(ClearType::CurrentLine))?;
        write_colored(out, line)?;
        queue!(out, Print("\n"))?;
    }
    Ok(())
}

fn write_colored(out: &mut impl Write, line: &str) -> io::Result<()> {
    for ch in line.chars() {
        match glyph_color(ch) {
            Some(color) => queue!(out, SetForegroundColor(color), Print(ch), ResetColor)?,
            None => queue!(out, Print(ch))?,
        }
    }
    Ok(())
}

fn glyph_color(ch: char) -> Option<Color> {
    if ch == Species::Sheep.glyph() {
        Some(Color::White)
    } else if ch == Species::Wolf.glyph() {
        Some(Color::Red)
    } else if ch == GRASS_GLYPH {
        Some(Color::Green)
    } else if ch == EMPTY_GLYPH {
        Some(Color::DarkGrey)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_colors() {
        assert_eq!(glyph_color('S'), Some(Color::White));
        assert_eq!(glyph_color('W'), Some(Color::Red));
        assert_eq!(glyph_color(GRASS_GLYPH), Some(Color::Green));
        assert_eq!(glyph_color(EMPTY_GLYPH), Some(Color::DarkGrey));
        assert_eq!(glyph_color('R'), None);
    }

    #[test]
    fn test_write_frame_contains_lines() {
        let lines = vec!["Round 1".to_string(), ". S .".to_string()];
        let mut buf = Vec::new();
        write_frame(&mut buf, &lines, 2).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Round 1"));
        assert!(text.contains('S'));
    }
}
