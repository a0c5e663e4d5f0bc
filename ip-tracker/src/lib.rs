pub mod adapters;
pub mod app_config;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::LookupController;
pub use domain::{address::is_valid_ip, errors::LookupError, state::LookupState};
pub use infrastructure::repository::ipapi_repository::IpApiRepository;
