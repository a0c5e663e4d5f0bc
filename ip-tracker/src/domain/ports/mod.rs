pub mod geolocation;

pub use geolocation::GeolocationClient;
