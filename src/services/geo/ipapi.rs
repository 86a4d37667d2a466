use std::time::Duration;

use anyhow::{Result, anyhow};
use reqwest::blocking::Client;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::USER_AGENT;

/// Blocking client for a geolocation-by-IP JSON API.
///
/// The endpoint is a URL template where `{ip}` stands for the address. An
/// endpoint without the placeholder gets the address appended as a path
/// segment.
pub struct GeoClient {
    client: Client,
    endpoint: String,
}

impl GeoClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn url_for(&self, ip: &str) -> String {
        if self.endpoint.contains("{ip}") {
            self.endpoint.replace("{ip}", ip)
        } else {
            format!("{}/{}", self.endpoint.trim_end_matches('/'), ip)
        }
    }

    /// Fetch location data for `ip`, dropping empty-string fields
    pub fn locate(&self, ip: &str) -> Result<Map<String, Value>> {
        let url = self.url_for(ip);
        debug!("Geolocation API URL (blocking): {}", url);

        let response = self.client.get(&url).header("User-Agent", USER_AGENT).send()?;

        if !response.status().is_success() {
            warn!("Geolocation API returned non-success status: {}", response.status());
            return Err(anyhow!("Geolocation API HTTP error: {}", response.status()));
        }

        let body = response.text()?;
        debug!("Geolocation API response body: {}", body);

        match serde_json::from_str::<Value>(&body)? {
            Value::Object(fields) => Ok(strip_empty(fields)),
            other => Err(anyhow!("Geolocation API returned a non-object body: {}", other)),
        }
    }
}

/// Remove fields whose value is the empty string
pub fn strip_empty(fields: Map<String, Value>) -> Map<String, Value> {
    fields
        .into_iter()
        .filter(|(_, value)| value.as_str() != Some(""))
        .collect()
}
