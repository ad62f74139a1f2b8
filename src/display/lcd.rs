//! HD44780 character LCD behind a PCF8574 I2C backpack
//!
//! 4-bit mode over the usual backpack wiring: RS/RW/E/backlight on the low
//! nibble, data on the high nibble. Timing follows the HD44780 datasheet.

use std::thread::sleep;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use embedded_hal::i2c::I2c;
use linux_embedded_hal::I2cdev;
use tracing::debug;

use super::DisplaySink;
use crate::layout::COLS;

// PCF8574 control bits
const RS_DATA: u8 = 0x01;
const ENABLE: u8 = 0x04;
const BACKLIGHT: u8 = 0x08;

// HD44780 commands
const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x06; // increment cursor, no shift
const CMD_DISPLAY_ON: u8 = 0x0C; // display on, cursor off, blink off
const CMD_FUNCTION_SET: u8 = 0x28; // 4-bit, 2 lines, 5x8 font
const CMD_SET_CGRAM: u8 = 0x40;
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM offset of the second display row
const ROW1_OFFSET: u8 = 0x40;

pub struct Pcf8574Lcd {
    i2c: I2cdev,
    addr: u8,
}

impl Pcf8574Lcd {
    /// Open the bus and run the 4-bit init sequence.
    pub fn new(bus: &str, addr: u8) -> Result<Self> {
        let i2c = I2cdev::new(bus).with_context(|| format!("opening I2C bus {bus}"))?;
        let mut lcd = Self { i2c, addr };

        // Power-on: force 8-bit mode three times, then switch to 4-bit.
        sleep(Duration::from_millis(50));
        lcd.write_nibble(0x30, 0)?;
        sleep(Duration::from_millis(5));
        lcd.write_nibble(0x30, 0)?;
        sleep(Duration::from_micros(150));
        lcd.write_nibble(0x30, 0)?;
        lcd.write_nibble(0x20, 0)?;

        lcd.command(CMD_FUNCTION_SET)?;
        lcd.command(CMD_DISPLAY_ON)?;
        lcd.command(CMD_CLEAR)?;
        sleep(Duration::from_millis(2));
        lcd.command(CMD_ENTRY_MODE)?;

        debug!("LCD initialized at {bus} 0x{addr:02x}");
        Ok(lcd)
    }

    fn write_raw(&mut self, byte: u8) -> Result<()> {
        self.i2c
            .write(self.addr, &[byte])
            .map_err(|e| anyhow!("I2C write to 0x{:02x} failed: {e:?}", self.addr))
    }

    /// Clock the high nibble of `value` out with an E pulse.
    fn write_nibble(&mut self, value: u8, flags: u8) -> Result<()> {
        let byte = (value & 0xF0) | flags | BACKLIGHT;
        self.write_raw(byte | ENABLE)?;
        sleep(Duration::from_micros(1));
        self.write_raw(byte & !ENABLE)?;
        sleep(Duration::from_micros(50));
        Ok(())
    }

    fn send(&mut self, byte: u8, flags: u8) -> Result<()> {
        self.write_nibble(byte, flags)?;
        self.write_nibble(byte << 4, flags)
    }

    fn command(&mut self, cmd: u8) -> Result<()> {
        self.send(cmd, 0)
    }

    fn data(&mut self, byte: u8) -> Result<()> {
        self.send(byte, RS_DATA)
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<()> {
        let offset = if row == 0 { 0 } else { ROW1_OFFSET };
        self.command(CMD_SET_DDRAM | (offset + col))
    }
}

impl DisplaySink for Pcf8574Lcd {
    fn clear(&mut self) -> Result<()> {
        self.command(CMD_CLEAR)?;
        sleep(Duration::from_millis(2));
        Ok(())
    }

    fn define_glyph(&mut self, slot: u8, bitmap: [u8; 8]) -> Result<()> {
        self.command(CMD_SET_CGRAM | ((slot & 0x07) << 3))?;
        for line in bitmap {
            self.data(line)?;
        }
        // Leave address mode pointing back at the display
        self.command(CMD_SET_DDRAM)
    }

    fn write_row(&mut self, row: u8, text: &[u8; COLS]) -> Result<()> {
        self.set_cursor(row, 0)?;
        for &byte in text {
            self.data(byte)?;
        }
        Ok(())
    }
}
