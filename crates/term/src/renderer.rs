//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previous one and only changed runs are
//! written, wrapped in a synchronized update so the terminal never shows a
//! half-drawn frame.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{self, BeginSynchronizedUpdate, EndSynchronizedUpdate},
    QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    mouse: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(32 * 1024),
            mouse: false,
        }
    }

    /// Also capture mouse events (needed for drag-to-move).
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse = enabled;
        self
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        if self.mouse {
            self.buf.queue(EnableMouseCapture)?;
        }
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.mouse {
            self.buf.queue(DisableMouseCapture)?;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, then keep it as the baseline for the next diff.
    ///
    /// The caller's buffer is swapped with the previous frame, so pass the same
    /// `FrameBuffer` every frame and re-render into it.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        self.buf.queue(BeginSynchronizedUpdate)?;
        match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                self.last = Some(prev);
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                self.last = stale.or_else(|| Some(FrameBuffer::new(fb.width(), fb.height())));
            }
        }
        self.buf.queue(EndSynchronizedUpdate)?;
        self.flush_buf()?;

        if let Some(prev) = self.last.as_mut() {
            std::mem::swap(prev, fb);
        }
        Ok(())
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

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut style = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        write_cells(out, fb.row(y), &mut style)?;
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the runs of cells that differ between `prev` and `next`.
///
/// Both frames must have the same dimensions.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = None;
    for y in 0..next.height() {
        let (old, new) = (prev.row(y), next.row(y));
        for (start, end) in changed_runs(old, new) {
            out.queue(cursor::MoveTo(start as u16, y))?;
            write_cells(out, &new[start..end], &mut style)?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Half-open index ranges where two rows differ, adjacent cells coalesced.
fn changed_runs<'a>(old: &'a [Cell], new: &'a [Cell]) -> impl Iterator<Item = (usize, usize)> + 'a {
    let len = new.len();
    let differs = move |i: usize| old.get(i) != new.get(i);
    let mut i = 0;
    std::iter::from_fn(move || {
        while i < len && !differs(i) {
            i += 1;
        }
        if i >= len {
            return None;
        }
        let start = i;
        while i < len && differs(i) {
            i += 1;
        }
        Some((start, i))
    })
}

fn write_cells(out: &mut Vec<u8>, cells: &[Cell], current: &mut Option<CellStyle>) -> Result<()> {
    for cell in cells {
        if *current != Some(cell.style) {
            apply_style_into(out, cell.style)?;
            *current = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(ch: char) -> Cell {
        Cell::new(ch, CellStyle::default())
    }

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let old = [cell('a'); 6];
        let mut new = old;
        new[1] = cell('x');
        new[2] = cell('x');
        new[3] = cell('x');
        new[5] = cell('y');

        let runs: Vec<_> = changed_runs(&old, &new).collect();
        assert_eq!(runs, vec![(1, 4), (5, 6)]);
    }

    #[test]
    fn identical_rows_have_no_runs() {
        let row = [cell('a'); 4];
        assert_eq!(changed_runs(&row, &row).count(), 0);
    }

    #[test]
    fn diff_of_identical_frames_only_resets_style() {
        let a = FrameBuffer::new(4, 2);
        let mut only_reset: Vec<u8> = Vec::new();
        only_reset.queue(ResetColor).unwrap();
        only_reset.queue(SetAttribute(Attribute::Reset)).unwrap();

        let mut out: Vec<u8> = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        assert_eq!(out, only_reset);
    }

    #[test]
    fn full_redraw_contains_every_glyph() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_str(0, 0, "AB", CellStyle::default());
        fb.put_str(0, 1, "CD", CellStyle::default());

        let mut out: Vec<u8> = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("AB"));
        assert!(text.contains("CD"));
    }

    #[test]
    fn style_conversion() {
        let style = CellStyle::default();
        assert_eq!(
            rgb_to_color(style.fg),
            Color::Rgb {
                r: style.fg.r,
                g: style.fg.g,
                b: style.fg.b
            }
        );
    }
}
