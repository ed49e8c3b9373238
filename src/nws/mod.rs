pub mod alert;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use tracing::debug;

use crate::config::Config;
use crate::error::{AlertQueryError, ConfigError};
use crate::nws::alert::AlertCollection;
use crate::region::RegionCode;

pub use alert::Alert;

pub const DEFAULT_ENDPOINT_BASE: &str = "https://api.weather.gov/alerts/active";

/// Anything able to look up the active alerts for a region.
#[async_trait]
pub trait AlertSource: Send + Sync {
    async fn fetch_alerts(&self, region: &RegionCode) -> Result<AlertCollection, AlertQueryError>;
}

/// Talks to the National Weather Service alerts API. One request per call, nothing
/// cached or retried.
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: Client,
    endpoint_base: String
}

impl NwsClient {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Self::with_builder(config, Client::builder())
    }

    /// Finishes `builder` with the configured user agent and GeoJSON accept header.
    pub fn with_builder(config: &Config, builder: ClientBuilder) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/geo+json"));

        let client = builder
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(NwsClient {
            client,
            endpoint_base: config.endpoint_base.clone()
        })
    }

    pub fn endpoint_url(&self, region: &RegionCode) -> String {
        format!("{}?area={}", self.endpoint_base, urlencoding::encode(region.as_str()))
    }
}

#[async_trait]
impl AlertSource for NwsClient {
    async fn fetch_alerts(&self, region: &RegionCode) -> Result<AlertCollection, AlertQueryError> {
        let url = self.endpoint_url(region);
        debug!("Fetching alerts from {}", url);

        let response: Response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AlertQueryError::HttpStatus {
                status: status.as_u16(),
                status_text: reason_phrase(&response, status)
            });
        }

        let body = response.text().await?;
        let collection = AlertCollection::from_json(&body)?;

        debug!("Received {} alerts for {}", collection.count(), region);

        Ok(collection)
    }
}

/// The server's own reason phrase when it differs from the canonical one.
fn reason_phrase(response: &Response, status: StatusCode) -> String {
    match response.extensions().get::<hyper::ext::ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => status.canonical_reason().unwrap_or_default().to_string()
    }
}
