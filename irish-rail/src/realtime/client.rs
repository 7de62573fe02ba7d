//! Irish Rail realtime HTTP client.
//!
//! Each call performs exactly one GET and maps the body; nothing is cached
//! and nothing is retried.

use std::time::Duration;

use tracing::debug;

use crate::domain::{ArrivingTrain, Station};

use super::config::RealtimeConfig;
use super::error::{ParseError, RealtimeError};
use super::mapper::{parse_arrivals, parse_stations};

/// Client for the Irish Rail realtime API.
///
/// Holds only configuration and a connection pool, so clones are cheap and
/// can be shared across tasks.
#[derive(Debug, Clone)]
pub struct RealtimeClient {
    http: reqwest::Client,
    base_url: String,
    namespace: String,
}

impl RealtimeClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RealtimeConfig) -> Result<Self, RealtimeError> {
        reqwest::Url::parse(&config.base_url).map_err(|e| RealtimeError::Config {
            message: format!("invalid base URL {:?}: {e}", config.base_url),
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            namespace: config.namespace,
        })
    }

    /// Base URL requests are made against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Namespace used for element lookup.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Fetch every station in the directory (`getAllStationsXML`).
    pub async fn all_stations(&self) -> Result<Vec<Station>, RealtimeError> {
        let body = self.get("getAllStationsXML", &[]).await?;
        Ok(parse_stations(&body, &self.namespace)?)
    }

    /// Fetch the trains due at `station` in the next 90 minutes
    /// (`getStationDataByNameXML`).
    ///
    /// The station is looked up by its description. The service decides the
    /// time window; the result is not filtered further.
    pub async fn station_arrivals<'s>(
        &self,
        station: &'s Station,
    ) -> Result<Vec<ArrivingTrain<'s>>, RealtimeError> {
        let body = self
            .get(
                "getStationDataByNameXML",
                &[("StationDesc", station.description())],
            )
            .await?;
        Ok(parse_arrivals(&body, &self.namespace, station)?)
    }

    /// GET `{base_url}/{operation}` and return the body text.
    ///
    /// The body must be UTF-8; invalid bytes are a parse error rather than
    /// being replaced.
    async fn get(&self, operation: &str, query: &[(&str, &str)]) -> Result<String, RealtimeError> {
        let url = format!("{}/{}", self.base_url, operation);
        debug!(%url, ?query, "requesting");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RealtimeError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let bytes = response.bytes().await?;
        let text = std::str::from_utf8(&bytes).map_err(ParseError::from)?;
        Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
    }
}
