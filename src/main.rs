//! adsb-near - nearest-aircraft spotter for a 16x2 character LCD
//!
//! Polls the adsb.lol closest-aircraft endpoint for a fixed ground location
//! and renders callsign, distance, type, altitude, speed and altitude trend
//! on an HD44780 LCD behind a PCF8574 I2C backpack.

mod config;
mod display;
mod feed;
mod geo;
mod layout;
mod observation;
mod plane_types;
mod poll;
mod trend;

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::{Config, DisplayBackend};
use display::{define_trend_glyphs, DisplaySink, Pcf8574Lcd, TermDisplay};
use feed::FeedClient;
use plane_types::PlaneTypes;
use poll::PollController;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging
    let max_level = if config.debug_logging {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_target(false)
        .init();

    info!("===========================================");
    info!("   adsb-near - nearest aircraft on 16x2");
    info!("===========================================");

    info!("Configuration:");
    info!("  API base: {}", config.api_base_url);
    info!("  Ground: ({:.6}, {:.6})", config.latitude, config.longitude);
    info!("  API radius: {} km", config.api_radius_km);
    info!("  Display radius: {} km", config.display_radius_km);
    info!(
        "  Delays: active {:?}, idle {:?}, error {:?}",
        config.poll_delay, config.idle_delay, config.error_delay
    );
    info!("  Display: {:?}", config.display_backend);

    let types = PlaneTypes::load(&config.plane_types_path);
    let feed = FeedClient::new(
        &config.api_base_url,
        config.latitude,
        config.longitude,
        config.api_radius_km,
    );
    info!("Polling {}", feed.url());

    match config.display_backend {
        DisplayBackend::Lcd => {
            let display = Pcf8574Lcd::new(&config.lcd_i2c_bus, config.lcd_i2c_addr)?;
            run(config, feed, types, display).await
        }
        DisplayBackend::Term => {
            let display = TermDisplay::new();
            run(config, feed, types, display).await
        }
    }
}

async fn run<D: DisplaySink>(
    config: Config,
    feed: FeedClient,
    types: PlaneTypes,
    mut display: D,
) -> Result<()> {
    define_trend_glyphs(&mut display)?;

    let splash = layout::splash_frame();
    display.clear()?;
    display.write_row(0, &splash.line1)?;
    display.write_row(1, &splash.line2)?;

    let mut controller = PollController::new(config, feed, types, display);
    controller.run().await
}
