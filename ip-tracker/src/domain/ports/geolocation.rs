use ipapi_rs::{GeoResult, IpApiError};
use std::future::Future;

pub trait GeolocationClient: Send + Sync + 'static {
    /// Resolves an already validated address. One attempt, no retry.
    fn lookup(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<GeoResult, IpApiError>> + Send;
}
