use std::env;

use anyhow::Context;

const SERVER_PORT_KEY: &str = "SERVER_PORT";

const IPAPI_ACCESS_KEY: &str = "IPAPI_ACCESS_KEY";

const IPAPI_BASE_URL: &str = "IPAPI_BASE_URL";

const DEFAULT_SERVER_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_port: u16,
    pub ipapi_access_key: String,
    pub ipapi_base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        dotenv::dotenv().ok();

        let server_port = match load_env(SERVER_PORT_KEY) {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_SERVER_PORT,
        };

        let ipapi_access_key =
            load_env(IPAPI_ACCESS_KEY).context("Failed to get ipapi access key")?;

        let ipapi_base_url = load_env(IPAPI_BASE_URL)
            .unwrap_or_else(|_| ipapi_rs::types::DEFAULT_BASE_URL.to_string());

        Ok(Config {
            server_port,
            ipapi_access_key,
            ipapi_base_url,
        })
    }
}

fn parse_port(raw: &str) -> anyhow::Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("invalid {} value {:?}", SERVER_PORT_KEY, raw))
}

fn load_env(key: &str) -> anyhow::Result<String> {
    env::var(key).with_context(|| format!("failed to load environment variable {}", key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_env_names_missing_variable() {
        let err = load_env("IP_TRACKER_TEST_SURELY_UNSET").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to load environment variable IP_TRACKER_TEST_SURELY_UNSET"
        );
    }

    #[test]
    fn parse_port_accepts_valid_ports() {
        assert_eq!(parse_port("8080").unwrap(), 8080);
        assert_eq!(parse_port(" 3000\n").unwrap(), 3000);
    }

    #[test]
    fn parse_port_rejects_garbage_instead_of_defaulting() {
        for raw in ["", "http", "70000", "-1"] {
            let err = parse_port(raw).unwrap_err();
            assert!(
                err.to_string().starts_with("invalid SERVER_PORT value"),
                "unexpected error for {raw:?}: {err}"
            );
        }
    }
}
