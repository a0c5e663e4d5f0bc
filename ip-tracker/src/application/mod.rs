pub mod services;

pub use services::lookup_controller::LookupController;
