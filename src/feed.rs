//! adsb.lol API client and response model

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Fetch failure, folded into a single failed-cycle outcome by the caller
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Response of /v2/closest - a list with at most one aircraft, closest first
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClosestResponse {
    #[serde(default)]
    pub ac: Option<Vec<RawAircraft>>,
}

/// One aircraft record as the API sends it.
///
/// Numeric fields stay as raw JSON values: the API mixes types (`alt_baro`
/// is the string "ground" for taxiing aircraft), so coercion is deferred to
/// the sanitizer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAircraft {
    #[serde(default)]
    pub lat: Option<Value>,
    #[serde(default)]
    pub lon: Option<Value>,
    /// Ground speed in knots
    #[serde(default)]
    pub gs: Option<Value>,
    /// Geometric (GNSS) altitude in feet
    #[serde(default)]
    pub alt_geom: Option<Value>,
    /// Barometric altitude in feet, or "ground"
    #[serde(default)]
    pub alt_baro: Option<Value>,
    /// Callsign
    #[serde(default)]
    pub flight: Option<String>,
    /// Type code, e.g. "B738"
    #[serde(default)]
    pub t: Option<String>,
    /// Registration
    #[serde(default)]
    pub r: Option<String>,
    /// API-reported distance in km
    #[serde(default)]
    pub dst: Option<Value>,
}

/// Client for the nearest-aircraft endpoint
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
}

impl FeedClient {
    pub fn new(base_url: &str, latitude: f64, longitude: f64, radius_km: f64) -> Self {
        let url = format!(
            "{}/v2/closest/{:.6}/{:.6}/{}",
            base_url.trim_end_matches('/'),
            latitude,
            longitude,
            radius_km
        );
        Self {
            http: reqwest::Client::new(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the closest aircraft. Any transport, status, or body-shape
    /// problem surfaces as a FeedError.
    pub async fn closest(&self) -> Result<ClosestResponse, FeedError> {
        debug!("Fetching {}", self.url);
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();
        debug!("Response status: {}", status);
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
