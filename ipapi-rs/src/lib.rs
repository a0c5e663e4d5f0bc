pub mod client;
pub mod errors;
pub mod types;
pub mod utils;

pub use client::IpApi;
pub use errors::IpApiError;
pub use types::{Config, GeoResult};
