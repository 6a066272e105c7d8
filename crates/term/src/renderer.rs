//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previously presented one and only changed
//! runs of cells are written. A size change (or `invalidate`) forces a full
//! redraw.

use std::io::{self, Write};

use anyhow::Result;
use log::debug;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        debug!("terminal: raw mode on, alternate screen entered");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        debug!("terminal: restored");
        Ok(())
    }

    /// Force the next present to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Present `fb`, then swap it with the previous frame.
    ///
    /// After the call `fb` holds stale contents the caller is expected to
    /// overwrite; this avoids cloning a frame every tick.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            Some(mut prev) => {
                encode_full_into(fb, &mut self.buf)?;
                prev.resize(fb.width(), fb.height());
                prev
            }
            None => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Writes cells while only emitting style changes.
struct CellWriter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> CellWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn cell(&mut self, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            apply_style_into(self.out, cell.style)?;
            self.style = Some(cell.style);
        }
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut w = CellWriter::new(out);
    for y in 0..fb.height() {
        w.out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            w.cell(fb.get(x, y).unwrap_or_default())?;
        }
    }
    w.finish()
}

/// Encode only the cells of `next` that differ from `prev`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut w = CellWriter::new(out);
    for (x, y, len) in changed_runs(prev, next) {
        w.out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            w.cell(next.get(x + dx, y).unwrap_or_default())?;
        }
    }
    w.finish()
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

/// Horizontal runs `(x, y, len)` where `next` differs from `prev`.
///
/// Buffers of different sizes yield every row of `next` as one run.
fn changed_runs<'a>(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> ChangedRuns<'a> {
    ChangedRuns {
        prev,
        next,
        same_size: prev.width() == next.width() && prev.height() == next.height(),
        x: 0,
        y: 0,
    }
}

/// Scans row by row, keeping its cursor between runs.
struct ChangedRuns<'a> {
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
    same_size: bool,
    x: u16,
    y: u16,
}

impl ChangedRuns<'_> {
    fn differs(&self, x: u16) -> bool {
        self.prev.get(x, self.y) != self.next.get(x, self.y)
    }
}

impl Iterator for ChangedRuns<'_> {
    type Item = (u16, u16, u16);

    fn next(&mut self) -> Option<Self::Item> {
        let width = self.next.width();
        while self.y < self.next.height() {
            if !self.same_size {
                let y = self.y;
                self.y += 1;
                return Some((0, y, width));
            }
            while self.x < width && !self.differs(self.x) {
                self.x += 1;
            }
            if self.x < width {
                let start = self.x;
                while self.x < width && self.differs(self.x) {
                    self.x += 1;
                }
                return Some((start, self.y, self.x - start));
            }
            self.x = 0;
            self.y += 1;
        }
        None
    }
}
