pub mod acquisition;
#[cfg(feature = "hydrate")]
pub mod geolocation;
pub mod map_provider;
pub mod popups;
pub mod scene;
pub mod share;
