//! Startup geolocation snapshot, looked up once from an ipinfo-style
//! endpoint. A failed or slow lookup degrades to empty values; it is never
//! fatal and never retried during the session.

use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Location fields carried in the report header, in render order.
/// Missing fields stay empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoSnapshot {
    pub ip: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub loc: String,
    pub postal: String,
    pub timezone: String,
}

/// Query `endpoint` with the given timeout, falling back to an empty
/// snapshot on any failure.
pub fn lookup(endpoint: &str, timeout: Duration) -> GeoSnapshot {
    try_lookup(endpoint, timeout).unwrap_or_default()
}

fn try_lookup(endpoint: &str, timeout: Duration) -> AppResult<GeoSnapshot> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;

    Ok(client.get(endpoint).send()?.error_for_status()?.json()?)
}
