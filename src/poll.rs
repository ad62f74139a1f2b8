//! Poll controller - the fetch/gate/format/display/sleep loop

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{error, info};

use crate::config::Config;
use crate::display::DisplaySink;
use crate::feed::{ClosestResponse, FeedClient};
use crate::geo;
use crate::layout::{self, Frame};
use crate::observation::AircraftObservation;
use crate::plane_types::PlaneTypes;
use crate::trend::TrendTracker;

/// What a successful cycle did, selecting the next delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CycleOutcome {
    /// An aircraft was rendered; poll again soon
    Shown,
    /// Nothing qualified for display; back off
    Idle,
}

pub struct PollController<D: DisplaySink> {
    config: Config,
    feed: FeedClient,
    types: PlaneTypes,
    trend: TrendTracker,
    display: D,
}

impl<D: DisplaySink> PollController<D> {
    pub fn new(config: Config, feed: FeedClient, types: PlaneTypes, display: D) -> Self {
        Self {
            config,
            feed,
            types,
            trend: TrendTracker::new(),
            display,
        }
    }

    /// Run forever. Every failure mode folds into an error frame plus the
    /// error-retry delay; the loop itself never exits.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let result = self.cycle().await;
            let delay = self.next_delay(result);
            tokio::time::sleep(delay).await;
        }
    }

    /// Map a finished cycle to the next poll delay. A failed cycle logs,
    /// writes the fixed error frame (best effort) and leaves the trend
    /// tracker alone.
    fn next_delay(&mut self, result: Result<CycleOutcome>) -> Duration {
        match result {
            Ok(CycleOutcome::Shown) => self.config.poll_delay,
            Ok(CycleOutcome::Idle) => self.config.idle_delay,
            Err(e) => {
                error!("Poll cycle failed: {e:#}");
                if let Err(e) = self.show_frame(&layout::error_frame()) {
                    error!("Error frame write failed: {e:#}");
                }
                self.config.error_delay
            }
        }
    }

    async fn cycle(&mut self) -> Result<CycleOutcome> {
        let response = self.feed.closest().await.context("fetch failed")?;
        self.handle_response(response)
    }

    /// Gate and render one API response. The trend tracker is only touched
    /// when an aircraft actually makes it onto the display.
    fn handle_response(&mut self, response: ClosestResponse) -> Result<CycleOutcome> {
        let first = response.ac.and_then(|mut list| {
            if list.is_empty() {
                None
            } else {
                Some(list.swap_remove(0))
            }
        });

        let Some(raw) = first else {
            return self.show_idle();
        };

        let obs = AircraftObservation::from_raw(&raw);
        let distance_km = geo::distance_km(
            self.config.latitude,
            self.config.longitude,
            obs.latitude,
            obs.longitude,
        );

        if distance_km.is_nan() || distance_km > self.config.display_radius_km {
            return self.show_idle();
        }

        self.render_aircraft(&obs, distance_km)?;
        Ok(CycleOutcome::Shown)
    }

    fn render_aircraft(&mut self, obs: &AircraftObservation, distance_km: f64) -> Result<()> {
        let altitude_m = geo::feet_to_meters(obs.display_altitude_ft());
        let speed_kmh = geo::knots_to_kmh(obs.display_speed_kn());

        let trend = self.trend.observe(&obs.callsign, altitude_m);
        let shown_trend = self.config.trend_indicator.then_some(trend);

        let frame = Frame {
            line1: layout::identity_line(&obs.callsign, distance_km, &obs.type_code),
            line2: layout::status_line(altitude_m, speed_kmh, shown_trend),
        };
        self.show_frame(&frame)?;

        let bearing = geo::bearing_deg(
            self.config.latitude,
            self.config.longitude,
            obs.latitude,
            obs.longitude,
        );
        let name = self.types.name_of(&obs.type_code);
        info!(
            "{} {}",
            Local::now().format("%H:%M:%S"),
            console_summary(obs, distance_km, bearing, name)
        );
        Ok(())
    }

    fn show_idle(&mut self) -> Result<CycleOutcome> {
        self.show_frame(&layout::idle_frame(self.config.display_radius_km))?;
        info!(
            "{} No aircraft within {} km",
            Local::now().format("%H:%M:%S"),
            self.config.display_radius_km
        );
        Ok(CycleOutcome::Idle)
    }

    fn show_frame(&mut self, frame: &Frame) -> Result<()> {
        self.display.clear()?;
        self.display.write_row(0, &frame.line1)?;
        self.display.write_row(1, &frame.line2)
    }
}

/// Detailed one-line operator summary for a rendered aircraft
fn console_summary(
    obs: &AircraftObservation,
    distance_km: f64,
    bearing_deg: f64,
    type_name: &str,
) -> String {
    let alt_ft = obs.display_altitude_ft();
    let alt_m = geo::feet_to_meters(alt_ft);
    let gs_kn = obs.display_speed_kn();
    let gs_kmh = geo::knots_to_kmh(gs_kn);

    format!(
        "{:<8}  {:<4}  {:<28}  {:<6}  {} km (API {})  {}  {:5.0} ft ({:4.0} m)  {:3.0} kn / {:3.0} km/h",
        obs.callsign,
        obs.type_code,
        type_name,
        obs.registration.as_deref().unwrap_or("-"),
        fmt_or_dashes(distance_km),
        fmt_or_dashes(obs.api_distance_km),
        bearing_or_dashes(bearing_deg),
        alt_ft,
        alt_m,
        gs_kn,
        gs_kmh,
    )
}

fn fmt_or_dashes(x: f64) -> String {
    if x.is_nan() {
        "---".to_string()
    } else {
        format!("{x:5.1}")
    }
}

fn bearing_or_dashes(x: f64) -> String {
    if x.is_nan() {
        "---".to_string()
    } else {
        format!("{x:5.1}\u{00b0}")
    }
}
