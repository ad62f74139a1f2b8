//! Configuration loaded from environment variables

use std::path::PathBuf;
use std::time::Duration;

/// Which device renders the two-line frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayBackend {
    /// PCF8574-backed HD44780 character LCD over I2C
    Lcd,
    /// Plain terminal output, for bench runs without hardware
    Term,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the adsb.lol-compatible API
    pub api_base_url: String,

    /// Ground station latitude in degrees
    pub latitude: f64,

    /// Ground station longitude in degrees
    pub longitude: f64,

    /// Search radius passed to the API, in km
    pub api_radius_km: f64,

    /// Maximum distance at which an aircraft is accepted for display, in km
    pub display_radius_km: f64,

    /// Delay between polls while an aircraft is displayed
    pub poll_delay: Duration,

    /// Delay between polls while nothing qualifies for display
    pub idle_delay: Duration,

    /// Delay before retrying after a failed cycle
    pub error_delay: Duration,

    /// I2C bus device of the LCD backpack
    pub lcd_i2c_bus: String,

    /// I2C address of the LCD backpack
    pub lcd_i2c_addr: u8,

    /// Path to the JSON type-code->name table
    pub plane_types_path: PathBuf,

    /// Display backend selection
    pub display_backend: DisplayBackend,

    /// Show the climb/descend/level glyph on line 2
    pub trend_indicator: bool,

    /// Enable debug-level logging
    pub debug_logging: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("ADSB_API_BASE")
                .unwrap_or_else(|_| "https://api.adsb.lol".to_string()),

            latitude: std::env::var("GROUND_LAT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(52.3105),

            longitude: std::env::var("GROUND_LON")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(4.7683),

            api_radius_km: std::env::var("API_RADIUS_KM")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(7.0),

            display_radius_km: std::env::var("DISPLAY_RADIUS_KM")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10.0),

            poll_delay: duration_var("POLL_SECS", 4.0),

            idle_delay: duration_var("IDLE_POLL_SECS", 30.0),

            error_delay: duration_var("ERROR_POLL_SECS", 5.0),

            lcd_i2c_bus: std::env::var("LCD_I2C_BUS")
                .unwrap_or_else(|_| "/dev/i2c-1".to_string()),

            lcd_i2c_addr: std::env::var("LCD_I2C_ADDR")
                .ok()
                .and_then(|s| parse_addr(&s))
                .unwrap_or(0x27),

            plane_types_path: std::env::var("PLANE_TYPES_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("plane_types.json")),

            display_backend: match std::env::var("DISPLAY_BACKEND").as_deref() {
                Ok("term") => DisplayBackend::Term,
                _ => DisplayBackend::Lcd,
            },

            trend_indicator: bool_var("TREND_INDICATOR", true),

            debug_logging: bool_var("DEBUG_INFO", false),
        }
    }
}

/// Parse an I2C address, accepting "0x27" or "39"
fn parse_addr(s: &str) -> Option<u8> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16).ok()
    } else {
        s.parse().ok()
    }
}

fn duration_var(name: &str, default_secs: f64) -> Duration {
    let secs = std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|s| s.is_finite() && *s >= 0.0)
        .unwrap_or(default_secs);
    Duration::from_secs_f64(secs)
}

fn bool_var(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|s| match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_addr_hex_and_decimal() {
        assert_eq!(parse_addr("0x27"), Some(0x27));
        assert_eq!(parse_addr("0X3F"), Some(0x3F));
        assert_eq!(parse_addr("39"), Some(39));
        assert_eq!(parse_addr("garbage"), None);
    }

    #[test]
    fn test_defaults_without_env() {
        // Env vars are not set under `cargo test`; the defaults apply.
        let config = Config::from_env();
        assert_eq!(config.api_radius_km, 7.0);
        assert_eq!(config.display_radius_km, 10.0);
        assert_eq!(config.poll_delay, Duration::from_secs(4));
        assert_eq!(config.idle_delay, Duration::from_secs(30));
        assert_eq!(config.error_delay, Duration::from_secs(5));
        assert_eq!(config.lcd_i2c_addr, 0x27);
        assert!(config.trend_indicator);
    }
}
