use crate::errors::IpApiError;
use crate::types::{Config, GeoResult};
use reqwest::{Client, StatusCode};
use serde_json::Value;

#[cfg(feature = "tracing")]
use tracing::{debug, error, info, instrument};

#[cfg_attr(feature = "tracing", instrument(skip(client, config, access_key)))]
pub async fn send_request(
    client: &Client,
    config: &Config,
    access_key: &str,
    address: &str,
) -> Result<GeoResult, IpApiError> {
    let url = format!("{}/{}", config.base_url.trim_end_matches('/'), address);
    #[cfg(feature = "tracing")]
    debug!(%url, "Sending request to ipapi");

    let res = client
        .get(&url)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .query(&[("access_key", access_key)])
        .send()
        .await
        .map_err(|e| IpApiError::from_transport(e, config.timeout))?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| IpApiError::from_transport(e, config.timeout))?;

    if !status.is_success() {
        let message = provider_message(status, &body);
        #[cfg(feature = "tracing")]
        error!(status = ?status, %message, "ipapi returned error");
        return Err(IpApiError::Api { status, message });
    }

    let payload: Value = serde_json::from_str(&body)?;

    // ipapi reports key and quota problems with a 200 and an error envelope.
    if payload.get("success") == Some(&Value::Bool(false)) {
        let message = provider_message(status, &body);
        #[cfg(feature = "tracing")]
        error!(status = ?status, %message, "ipapi returned error envelope");
        return Err(IpApiError::Api { status, message });
    }

    let result: GeoResult = serde_json::from_value(payload)?;
    #[cfg(feature = "tracing")]
    info!(status = ?status, ip = ?result.ip, "ipapi request successful");
    Ok(result)
}

/// Best-effort extraction of the provider's own explanation of a failure.
pub fn provider_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        v.pointer("/error/info")
            .or_else(|| v.pointer("/error/type"))
            .or_else(|| v.get("message"))
            .and_then(Value::as_str)
            .map(str::to_owned)
    });

    from_json
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        })
}
