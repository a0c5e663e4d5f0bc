use crate::types::{Config, GeoResult};
use crate::utils::send_request;
use crate::errors::IpApiError;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct IpApi {
    pub access_key: String,
    pub config: Arc<Config>,
    http: Client,
}

impl IpApi {
    pub fn init(access_key: &str, config: Option<Config>) -> Result<Self, IpApiError> {
        let config = Arc::new(config.unwrap_or_default());
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(IpApiError::Client)?;
        Ok(Self {
            access_key: access_key.to_string(),
            config,
            http,
        })
    }

    /// Fetches the geolocation record for `address`.
    ///
    /// The address is sent as-is; callers validate it first. One attempt is
    /// made, with no retry and no caching.
    pub async fn lookup(&self, address: &str) -> Result<GeoResult, IpApiError> {
        send_request(&self.http, &self.config, &self.access_key, address).await
    }
}
