//! Fixed-width line formatting for the 16x2 display
//!
//! Pure functions from sanitized values to 16-byte rows. Rows are byte
//! arrays rather than strings because the trend indicator occupies one cell
//! with a custom CGRAM glyph (codes 0..=2), which has no text equivalent.

use crate::trend::Trend;

/// Display width in character cells
pub const COLS: usize = 16;

/// One rendered 2x16 display frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub line1: [u8; COLS],
    pub line2: [u8; COLS],
}

/// Identity/distance line: "{callsign} {distance}km {type_code}", centered.
///
/// An overlong compose shrinks the callsign from the right (down to one
/// char) before hard truncation. A NaN distance renders as "--".
pub fn identity_line(callsign: &str, distance_km: f64, type_code: &str) -> [u8; COLS] {
    let dist = if distance_km.is_nan() {
        "--".to_string()
    } else {
        ((distance_km + 0.5) as u64).to_string()
    };

    let mut callsign = callsign.to_string();
    let mut base = format!("{callsign} {dist}km {type_code}");
    while base.len() > COLS && callsign.len() > 1 {
        callsign.pop();
        base = format!("{callsign} {dist}km {type_code}");
    }

    if base.len() < COLS {
        let pad_total = COLS - base.len();
        let left = pad_total / 2;
        let right = pad_total - left;
        base = format!("{}{}{}", " ".repeat(left), base, " ".repeat(right));
    }

    row_from_bytes(base.as_bytes())
}

/// Altitude/speed/trend line: "{alt:5}m{glyph} {speed:3}km/h", left-aligned.
///
/// `trend` is None when the indicator is disabled in config; the glyph cell
/// then stays blank.
pub fn status_line(altitude_m: f64, speed_kmh: f64, trend: Option<Trend>) -> [u8; COLS] {
    let alt = (altitude_m + 0.5) as i64;
    let speed = (speed_kmh + 0.5) as i64;
    let glyph = trend.map(Trend::glyph_slot).unwrap_or(b' ');

    let mut line: Vec<u8> = format!("{alt:5}m").into_bytes();
    line.push(glyph);
    line.extend_from_slice(format!(" {speed:3}km/h").as_bytes());

    row_from_bytes(&line)
}

/// Startup frame shown while the first fetch is in flight
pub fn splash_frame() -> Frame {
    Frame {
        line1: row_from_bytes(b"    ADSBnear"),
        line2: row_from_bytes(b"  Connecting.."),
    }
}

/// "No traffic nearby" frame, visually distinct from the error frame
pub fn idle_frame(display_radius_km: f64) -> Frame {
    let line2 = if display_radius_km.fract() == 0.0 {
        format!("{display_radius_km:.0}km | Scanning")
    } else {
        format!("{display_radius_km}km | Scanning")
    };
    Frame {
        line1: row_from_bytes(b"No planes within"),
        line2: row_from_bytes(line2.as_bytes()),
    }
}

/// "System malfunction" frame shown on any failed cycle
pub fn error_frame() -> Frame {
    Frame {
        line1: row_from_bytes(b"API / Net Error"),
        line2: row_from_bytes(b"Retrying..."),
    }
}

/// Left-align into a 16-cell row, blank-filled, hard-truncated
fn row_from_bytes(text: &[u8]) -> [u8; COLS] {
    let mut row = [b' '; COLS];
    let n = text.len().min(COLS);
    row[..n].copy_from_slice(&text[..n]);
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_str(row: &[u8; COLS]) -> String {
        String::from_utf8_lossy(row).into_owned()
    }

    #[test]
    fn test_identity_line_centers_short_compose() {
        let row = identity_line("KLM123", 5.56, "B738");
        assert_eq!(as_str(&row), "KLM123 6km B738 ");
    }

    #[test]
    fn test_identity_line_centers_symmetrically() {
        // 14 chars of content, one space each side
        let row = identity_line("????", f64::NAN, "????");
        assert_eq!(as_str(&row), " ???? --km ???? ");
    }

    #[test]
    fn test_identity_line_shrinks_callsign_to_fit() {
        // "RYANAIR 123km B738" is 18 wide; two chars come off the callsign
        let row = identity_line("RYANAIR", 123.4, "B738");
        assert_eq!(as_str(&row), "RYANA 123km B738");
        assert_eq!(row.len(), COLS);
    }

    #[test]
    fn test_identity_line_shrinks_to_one_char_floor() {
        // "LONGCALL 1234567km A388" is 23 wide; only a one-char callsign fits
        let row = identity_line("LONGCALL", 1234567.0, "A388");
        assert_eq!(as_str(&row), "L 1234567km A388");
    }

    #[test]
    fn test_identity_line_hard_truncates_past_shrink_floor() {
        // 17 wide even at the one-char floor: the tail is cut, never the width
        let row = identity_line("X", 12345678.0, "A388");
        assert_eq!(as_str(&row), "X 12345678km A38");
    }

    #[test]
    fn test_identity_line_rounds_distance_half_up() {
        let row = identity_line("AB", 5.5, "A320");
        assert_eq!(as_str(&row), "  AB 6km A320   ");
        let row = identity_line("AB", 5.49, "A320");
        assert_eq!(as_str(&row), "  AB 5km A320   ");
    }

    #[test]
    fn test_status_line_layout() {
        let row = status_line(1066.8, 277.8, Some(Trend::Level));
        let mut expected = *b" 1067m? 278km/h ";
        expected[6] = Trend::Level.glyph_slot();
        assert_eq!(row, expected);
    }

    #[test]
    fn test_status_line_trend_disabled_blanks_glyph_cell() {
        let row = status_line(1066.8, 277.8, None);
        assert_eq!(row[6], b' ');
    }

    #[test]
    fn test_status_line_zero_values() {
        let row = status_line(0.0, 0.0, Some(Trend::Level));
        let mut expected = *b"    0m?   0km/h ";
        expected[6] = Trend::Level.glyph_slot();
        assert_eq!(row, expected);
    }

    #[test]
    fn test_formatter_is_pure() {
        let a = identity_line("KLM123", 5.56, "B738");
        let b = identity_line("KLM123", 5.56, "B738");
        assert_eq!(a, b);
        let c = status_line(1066.8, 277.8, Some(Trend::Climb));
        let d = status_line(1066.8, 277.8, Some(Trend::Climb));
        assert_eq!(c, d);
    }

    #[test]
    fn test_fixed_frames_are_distinct() {
        let idle = idle_frame(10.0);
        assert_eq!(as_str(&idle.line1), "No planes within");
        assert_eq!(as_str(&idle.line2), "10km | Scanning ");
        let err = error_frame();
        assert_ne!(idle.line1, err.line1);
        assert_ne!(idle.line2, err.line2);
    }
}
