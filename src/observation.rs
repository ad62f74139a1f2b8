//! Field sanitization - turns a raw API record into a clean observation
//!
//! adsb.lol fields are frequently missing or mixed-typed (`alt_baro` can be
//! the string "ground"). Every numeric field is coerced with a NaN sentinel
//! for "unknown" so one bad field never aborts a poll cycle.

use serde_json::Value;

use crate::feed::RawAircraft;

/// Maximum callsign length carried into the identity line
const CALLSIGN_MAX: usize = 7;

/// Normalized type-code width
const TYPE_CODE_LEN: usize = 4;

/// Sanitized per-cycle aircraft record
#[derive(Debug, Clone)]
pub struct AircraftObservation {
    /// Latitude in degrees, NaN when absent
    pub latitude: f64,
    /// Longitude in degrees, NaN when absent
    pub longitude: f64,
    /// Ground speed in knots, NaN when absent
    pub ground_speed_kn: f64,
    /// Altitude in feet, geometric preferred over barometric, NaN when absent
    pub altitude_ft: f64,
    /// Callsign, trimmed, capped to 7 chars, "????" when absent
    pub callsign: String,
    /// Type code, uppercased and normalized to exactly 4 chars
    pub type_code: String,
    /// Registration, trimmed, None when absent or empty
    pub registration: Option<String>,
    /// Distance as reported by the API in km, NaN when absent (diagnostic only)
    pub api_distance_km: f64,
}

impl AircraftObservation {
    pub fn from_raw(raw: &RawAircraft) -> Self {
        // Geometric altitude wins only when it is actually numeric.
        let alt_geom = coerce_f64(raw.alt_geom.as_ref());
        let altitude_ft = if alt_geom.is_nan() {
            coerce_f64(raw.alt_baro.as_ref())
        } else {
            alt_geom
        };

        let registration = raw
            .r
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        Self {
            latitude: coerce_f64(raw.lat.as_ref()),
            longitude: coerce_f64(raw.lon.as_ref()),
            ground_speed_kn: coerce_f64(raw.gs.as_ref()),
            altitude_ft,
            callsign: sanitize_callsign(raw.flight.as_deref()),
            type_code: normalize_type_code(raw.t.as_deref()),
            registration,
            api_distance_km: coerce_f64(raw.dst.as_ref()),
        }
    }

    /// Ground speed with NaN degraded to 0 for display arithmetic
    pub fn display_speed_kn(&self) -> f64 {
        if self.ground_speed_kn.is_nan() {
            0.0
        } else {
            self.ground_speed_kn
        }
    }

    /// Altitude with NaN degraded to 0 for display arithmetic
    pub fn display_altitude_ft(&self) -> f64 {
        if self.altitude_ft.is_nan() {
            0.0
        } else {
            self.altitude_ft
        }
    }
}

/// Coerce a JSON value to f64, NaN when missing or non-numeric.
///
/// Accepts numbers and numeric strings; everything else ("ground", bools,
/// arrays) is the NaN sentinel. Never errors.
pub fn coerce_f64(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Trim, default to "????" when absent/empty, cap to 7 chars.
pub fn sanitize_callsign(flight: Option<&str>) -> String {
    let trimmed = flight.unwrap_or("").trim();
    if trimmed.is_empty() {
        return "????".to_string();
    }
    trimmed.chars().take(CALLSIGN_MAX).collect()
}

/// Normalize a type code to exactly 4 uppercase chars.
///
/// Empty input becomes "????"; longer codes truncate; shorter ones pad
/// with '?'.
pub fn normalize_type_code(code: Option<&str>) -> String {
    let upper = code.unwrap_or("").trim().to_uppercase();
    if upper.is_empty() {
        return "????".to_string();
    }
    let mut out: String = upper.chars().take(TYPE_CODE_LEN).collect();
    while out.chars().count() < TYPE_CODE_LEN {
        out.push('?');
    }
    out
}
