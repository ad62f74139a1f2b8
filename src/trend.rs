//! Altitude trend tracking across poll cycles
//!
//! The one piece of carried state in the whole loop: the previously
//! displayed (callsign, altitude) pair. Updated exactly once per cycle that
//! actually renders an aircraft, never on idle or error cycles, so an
//! out-of-range aircraft cannot pollute the next comparison.

/// Altitude change below this is treated as level flight (sensor jitter)
const TREND_DEADBAND_M: f64 = 20.0;

/// Observable altitude trend of the displayed aircraft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Climb,
    Descend,
    Level,
}

impl Trend {
    /// CGRAM slot holding this trend's arrow glyph
    pub fn glyph_slot(self) -> u8 {
        match self {
            Trend::Climb => 0,
            Trend::Descend => 1,
            Trend::Level => 2,
        }
    }
}

/// Carried (callsign, altitude) state from the last displayed aircraft
#[derive(Debug, Default)]
pub struct TrendTracker {
    last_altitude_m: Option<f64>,
    last_callsign: Option<String>,
}

impl TrendTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the altitude trend for the aircraft about to be displayed
    /// and store its (callsign, altitude) pair as the new reference.
    ///
    /// A callsign change discards the stored altitude, so a newly appeared
    /// flight always starts level. The reference is updated even when the
    /// result is Level, keeping the next delta measured from the freshest
    /// sample.
    pub fn observe(&mut self, callsign: &str, altitude_m: f64) -> Trend {
        let same_flight = self.last_callsign.as_deref() == Some(callsign);

        let trend = match (same_flight, self.last_altitude_m) {
            (true, Some(prev)) => {
                let delta = altitude_m - prev;
                if delta > TREND_DEADBAND_M {
                    Trend::Climb
                } else if delta < -TREND_DEADBAND_M {
                    Trend::Descend
                } else {
                    Trend::Level
                }
            }
            _ => Trend::Level,
        };

        self.last_altitude_m = Some(altitude_m);
        self.last_callsign = Some(callsign.to_string());
        trend
    }
}
