use std::time::Duration;

use ipapi_rs::{Config, GeoResult, IpApi, IpApiError};

use crate::domain::ports::geolocation::GeolocationClient;

#[derive(Clone)]
pub struct IpApiRepository {
    ipapi: IpApi,
}

impl IpApiRepository {
    pub fn new(access_key: &str, base_url: &str, timeout: Duration) -> Result<Self, IpApiError> {
        let config = Config {
            base_url: base_url.to_string(),
            timeout,
        };
        let ipapi = IpApi::init(access_key, Some(config))?;
        Ok(Self { ipapi })
    }
}

impl GeolocationClient for IpApiRepository {
    async fn lookup(&self, address: &str) -> Result<GeoResult, IpApiError> {
        self.ipapi.lookup(address).await
    }
}
