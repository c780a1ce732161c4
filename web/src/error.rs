use thiserror::Error;

use crate::utils::acquisition::DisabledReason;

/// Reasons the map provider could not be brought up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapProviderError {
    #[error("no access key is configured for the tile provider")]
    MissingAccessKey,
    #[error("the Leaflet script is not available on the page")]
    ScriptUnavailable,
    #[error("the tile provider rejected the probe request")]
    TileRequestRejected,
}

/// Everything the page can show the user as a failure. The display strings
/// are the messages rendered on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeoMapError {
    #[error("Your browser does not support Geolocation")]
    CapabilityUnsupported,
    #[error("Geolocation is not enabled. Please enable it in your browser settings.")]
    CapabilityDisabled(DisabledReason),
    #[error("Failed to load the map. Please check your access key and network connection.")]
    MapProviderLoadFailure(#[source] MapProviderError),
}

impl From<MapProviderError> for GeoMapError {
    fn from(err: MapProviderError) -> Self {
        GeoMapError::MapProviderLoadFailure(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn disabled_message_ignores_the_reason() {
        let denied = GeoMapError::CapabilityDisabled(DisabledReason::PermissionDenied);
        let timeout = GeoMapError::CapabilityDisabled(DisabledReason::Timeout);
        assert_eq!(denied.to_string(), timeout.to_string());
    }

    #[test]
    fn provider_failure_keeps_its_cause() {
        let err: GeoMapError = MapProviderError::TileRequestRejected.into();
        assert!(err.to_string().starts_with("Failed to load the map"));
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some(MapProviderError::TileRequestRejected.to_string())
        );
    }
}
