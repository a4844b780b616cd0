//! Adapter that prints the chart after every commit

use std::io::Write;

use dynachart::{Color, ColumnSnapshot, DataTableAdapter, Error, Frame, MemoryAdapter, Result};

use crate::render::render_chart;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Wraps a [`MemoryAdapter`] and writes each committed chart state to `out`
pub(crate) struct TerminalAdapter<W: Write> {
    host: MemoryAdapter,
    out: W,
    width: usize,
    clear: bool,
}

impl<W: Write> TerminalAdapter<W> {
    pub(crate) fn new(host: MemoryAdapter, out: W, width: usize) -> Self {
        Self {
            host,
            out,
            width,
            clear: false,
        }
    }

    /// Clear the screen before each chart instead of appending
    pub(crate) fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    fn draw(&mut self) -> std::io::Result<()> {
        if self.clear {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        let text = render_chart(self.host.chart(), self.width);
        self.out.write_all(text.as_bytes())?;
        if !self.clear {
            self.out.write_all(b"\n")?;
        }
        self.out.flush()
    }
}

impl<W: Write> DataTableAdapter for TerminalAdapter<W> {
    fn column_count(&mut self) -> Result<usize> {
        self.host.column_count()
    }

    fn read_column(&mut self, index: usize) -> Result<ColumnSnapshot> {
        self.host.read_column(index)
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        self.host.write_frame(frame)
    }

    fn set_point_color(&mut self, row: usize, color: Color) -> Result<()> {
        self.host.set_point_color(row, color)
    }

    fn set_label(&mut self, text: &str) -> Result<()> {
        self.host.set_label(text)
    }

    fn commit(&mut self) -> Result<()> {
        self.host.commit()?;
        self.draw()
            .map_err(|e| Error::commit(format!("terminal write failed: {}", e)))
    }
}
