//! Display sink abstraction and backends
//!
//! The controller renders through `DisplaySink` so the formatting pipeline
//! is testable without hardware. Backends: the real PCF8574/HD44780 LCD and
//! a terminal renderer for bench runs.

mod lcd;
mod term;

pub use lcd::Pcf8574Lcd;
pub use term::TermDisplay;

use anyhow::Result;

use crate::layout::COLS;

/// A 2x16 character-cell display with a few definable glyphs
pub trait DisplaySink {
    fn clear(&mut self) -> Result<()>;

    /// Upload a 5x8 glyph bitmap into one of the custom character slots
    fn define_glyph(&mut self, slot: u8, bitmap: [u8; 8]) -> Result<()>;

    /// Write a full row of character cells at the given row (0 or 1)
    fn write_row(&mut self, row: u8, text: &[u8; COLS]) -> Result<()>;
}

/// 5x8 climb arrow (glyph slot 0)
const UP_ARROW: [u8; 8] = [
    0b00000, 0b00000, 0b00100, 0b01110, 0b11111, 0b00000, 0b00000, 0b00000,
];

/// 5x8 descent arrow (glyph slot 1)
const DOWN_ARROW: [u8; 8] = [
    0b00000, 0b00000, 0b00000, 0b11111, 0b01110, 0b00100, 0b00000, 0b00000,
];

/// 5x8 level bar (glyph slot 2)
const LEVEL_BAR: [u8; 8] = [
    0b00000, 0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000,
];

/// Install the three trend glyphs into slots 0..=2
pub fn define_trend_glyphs<D: DisplaySink>(display: &mut D) -> Result<()> {
    display.define_glyph(0, UP_ARROW)?;
    display.define_glyph(1, DOWN_ARROW)?;
    display.define_glyph(2, LEVEL_BAR)?;
    Ok(())
}
