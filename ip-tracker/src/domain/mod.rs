pub mod address;
pub mod errors;
pub mod ports;
pub mod state;
pub mod view;
