//! Terminal display backend
//!
//! Draws the 2x16 frame as a boxed block on stdout. Glyph slots map to
//! ASCII stand-ins so trend arrows stay visible without CGRAM.

use anyhow::Result;

use super::DisplaySink;
use crate::layout::COLS;

#[derive(Debug, Default)]
pub struct TermDisplay {
    rows: [[u8; COLS]; 2],
}

impl TermDisplay {
    pub fn new() -> Self {
        Self {
            rows: [[b' '; COLS]; 2],
        }
    }

    fn render(&self) {
        let border = "-".repeat(COLS);
        println!("+{border}+");
        for row in &self.rows {
            let text: String = row.iter().map(|&b| glyph_to_ascii(b)).collect();
            println!("|{text}|");
        }
        println!("+{border}+");
    }
}

fn glyph_to_ascii(byte: u8) -> char {
    match byte {
        0 => '^',
        1 => 'v',
        2 => '-',
        b => b as char,
    }
}

impl DisplaySink for TermDisplay {
    fn clear(&mut self) -> Result<()> {
        self.rows = [[b' '; COLS]; 2];
        Ok(())
    }

    fn define_glyph(&mut self, _slot: u8, _bitmap: [u8; 8]) -> Result<()> {
        Ok(())
    }

    fn write_row(&mut self, row: u8, text: &[u8; COLS]) -> Result<()> {
        self.rows[(row as usize).min(1)] = *text;
        // The controller writes row 0 then row 1; repaint on the second.
        if row == 1 {
            self.render();
        }
        Ok(())
    }
}
