//! Terminal renderer for the demo driver.
//!
//! Draws a [`BoardSnapshot`] as a bordered field of double-width blocks.
//! Frames are encoded into an internal byte buffer of queued crossterm
//! commands and flushed in one write, full redraw per frame; the board is
//! small enough that diffing would buy nothing here.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::BoardSnapshot;
use crate::types::CellState;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one snapshot frame.
    pub fn draw<const ROWS: usize, const COLS: usize>(
        &mut self,
        snapshot: &BoardSnapshot<ROWS, COLS>,
    ) -> Result<()> {
        self.buf.clear();
        encode_frame_into(snapshot, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full frame of crossterm commands into `out` without touching
/// stdout.
pub fn encode_frame_into<const ROWS: usize, const COLS: usize>(
    snapshot: &BoardSnapshot<ROWS, COLS>,
    out: &mut Vec<u8>,
) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    let border_color = if snapshot.game_over {
        Color::Red
    } else {
        Color::DarkGrey
    };

    out.queue(SetForegroundColor(border_color))?;
    out.queue(Print("+"))?;
    out.queue(Print("-".repeat(COLS * 2)))?;
    out.queue(Print("+\r\n"))?;

    for row in 0..ROWS {
        out.queue(SetForegroundColor(border_color))?;
        out.queue(Print("|"))?;
        for col in 0..COLS {
            let (glyph, color) = match snapshot.cells[row][col] {
                CellState::Empty => ("  ", Color::Reset),
                CellState::Frozen => ("[]", Color::White),
                CellState::Active => ("##", Color::Yellow),
            };
            out.queue(SetForegroundColor(color))?;
            out.queue(Print(glyph))?;
        }
        out.queue(SetForegroundColor(border_color))?;
        out.queue(Print("|\r\n"))?;
    }

    out.queue(SetForegroundColor(border_color))?;
    out.queue(Print("+"))?;
    out.queue(Print("-".repeat(COLS * 2)))?;
    out.queue(Print("+\r\n"))?;

    if snapshot.game_over {
        out.queue(Print("  game over\r\n"))?;
    } else {
        out.queue(Print("  arrows move, up rotates, r resets, q quits\r\n"))?;
    }

    out.queue(ResetColor)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BadgeGrid;
    use crate::types::CellState::Frozen;

    #[test]
    fn encoded_frame_contains_board_glyphs() {
        let mut grid = BadgeGrid::new();
        grid.set(15, 0, Frozen).unwrap();

        let mut snapshot = BoardSnapshot::new();
        snapshot.capture(&grid, false);

        let mut out = Vec::new();
        encode_frame_into(&snapshot, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("[]"));
        assert!(text.contains("arrows move"));
    }

    #[test]
    fn game_over_frame_says_so() {
        let grid = BadgeGrid::new();
        let mut snapshot = BoardSnapshot::new();
        snapshot.capture(&grid, true);

        let mut out = Vec::new();
        encode_frame_into(&snapshot, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("game over"));
    }
}
