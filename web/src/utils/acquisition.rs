//! Location and map-provider lifecycles.
//!
//! The two axes are tracked separately: a provider failure can sit next to a
//! known location without hiding it.

use shared_types::Coordinates;

use crate::error::{GeoMapError, MapProviderError};

pub const PENDING_MESSAGE: &str =
    "Getting the location data… If this takes too long, please check your location permissions.";

/// Why the platform refused to hand out a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledReason {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
}

impl DisabledReason {
    /// Maps a `GeolocationPositionError.code`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => DisabledReason::PermissionDenied,
            3 => DisabledReason::Timeout,
            _ => DisabledReason::PositionUnavailable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationEvent {
    Position(Coordinates),
    PositionError(DisabledReason),
}

/// Tracks whether the platform answered a location request before the
/// user-decision deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecisionGuard {
    answered: bool,
}

impl DecisionGuard {
    pub fn answer(&mut self) {
        self.answered = true;
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// The event to emit when the deadline passes, if any. A request that
    /// was already answered never times out.
    pub fn on_deadline(&self) -> Option<LocationEvent> {
        if self.answered {
            None
        } else {
            Some(LocationEvent::PositionError(DisabledReason::Timeout))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LocationState {
    Unsupported,
    Disabled(DisabledReason),
    #[default]
    Pending,
    Available(Coordinates),
}

/// What to show instead of the map while no coordinates are known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placeholder {
    Waiting(&'static str),
    Blocked(GeoMapError),
}

impl LocationState {
    pub fn initial(capability_present: bool) -> Self {
        if capability_present {
            LocationState::Pending
        } else {
            LocationState::Unsupported
        }
    }

    /// Applies a platform callback. Returns whether the state changed.
    pub fn apply(&mut self, event: LocationEvent) -> bool {
        let next = match (*self, event) {
            (LocationState::Unsupported, _) | (LocationState::Disabled(_), _) => return false,
            (_, LocationEvent::Position(coords)) => LocationState::Available(coords),
            (LocationState::Pending, LocationEvent::PositionError(reason)) => {
                LocationState::Disabled(reason)
            }
            (LocationState::Available(_), LocationEvent::PositionError(_)) => return false,
        };
        let changed = next != *self;
        *self = next;
        changed
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            LocationState::Available(coords) => Some(*coords),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<GeoMapError> {
        match self {
            LocationState::Unsupported => Some(GeoMapError::CapabilityUnsupported),
            LocationState::Disabled(reason) => Some(GeoMapError::CapabilityDisabled(*reason)),
            _ => None,
        }
    }

    pub fn placeholder(&self) -> Option<Placeholder> {
        match self {
            LocationState::Available(_) => None,
            LocationState::Pending => Some(Placeholder::Waiting(PENDING_MESSAGE)),
            other => other.error().map(Placeholder::Blocked),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapProviderState {
    #[default]
    Loading,
    Ready,
    Failed(MapProviderError),
}

impl MapProviderState {
    /// The first outcome sticks; later callbacks are ignored.
    pub fn settle(&mut self, outcome: Result<(), MapProviderError>) -> bool {
        if *self != MapProviderState::Loading {
            return false;
        }
        *self = match outcome {
            Ok(()) => MapProviderState::Ready,
            Err(err) => MapProviderState::Failed(err),
        };
        true
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, MapProviderState::Failed(_))
    }

    pub fn error(&self) -> Option<GeoMapError> {
        match self {
            MapProviderState::Failed(err) => Some(GeoMapError::MapProviderLoadFailure(*err)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTRE: Coordinates = Coordinates {
        lat: 53.3498,
        lng: -6.2603,
    };

    #[test]
    fn capability_decides_initial_state() {
        assert_eq!(LocationState::initial(false), LocationState::Unsupported);
        assert_eq!(LocationState::initial(true), LocationState::Pending);
    }

    #[test]
    fn unsupported_ignores_every_event() {
        let mut state = LocationState::Unsupported;
        assert!(!state.apply(LocationEvent::Position(CENTRE)));
        assert!(!state.apply(LocationEvent::PositionError(DisabledReason::Timeout)));
        assert_eq!(state, LocationState::Unsupported);
    }

    #[test]
    fn pending_error_disables_and_stays_disabled() {
        let mut state = LocationState::Pending;
        assert!(state.apply(LocationEvent::PositionError(DisabledReason::PermissionDenied)));
        assert_eq!(state, LocationState::Disabled(DisabledReason::PermissionDenied));

        assert!(!state.apply(LocationEvent::Position(CENTRE)));
        assert_eq!(state.coordinates(), None);
    }

    #[test]
    fn last_delivery_wins() {
        let mut state = LocationState::Pending;
        state.apply(LocationEvent::Position(Coordinates::new(1.0, 2.0)));
        state.apply(LocationEvent::Position(Coordinates::new(3.0, 4.0)));
        assert_eq!(state.coordinates(), Some(Coordinates::new(3.0, 4.0)));
    }

    #[test]
    fn late_error_keeps_known_coordinates() {
        let mut state = LocationState::Available(CENTRE);
        assert!(!state.apply(LocationEvent::PositionError(DisabledReason::Timeout)));
        assert_eq!(state.coordinates(), Some(CENTRE));
    }

    #[test]
    fn same_delivery_twice_reports_no_change() {
        let mut state = LocationState::Available(CENTRE);
        assert!(!state.apply(LocationEvent::Position(CENTRE)));
    }

    #[test]
    fn placeholders_per_state() {
        assert_eq!(
            LocationState::Pending.placeholder(),
            Some(Placeholder::Waiting(PENDING_MESSAGE))
        );
        assert_eq!(
            LocationState::Unsupported.placeholder(),
            Some(Placeholder::Blocked(GeoMapError::CapabilityUnsupported))
        );
        assert!(matches!(
            LocationState::Disabled(DisabledReason::Timeout).placeholder(),
            Some(Placeholder::Blocked(GeoMapError::CapabilityDisabled(_)))
        ));
        assert_eq!(LocationState::Available(CENTRE).placeholder(), None);
    }

    #[test]
    fn unanswered_deadline_disables_with_timeout() {
        let guard = DecisionGuard::default();
        let mut state = LocationState::initial(true);

        let event = guard.on_deadline().expect("deadline fires");
        assert!(state.apply(event));
        assert_eq!(state, LocationState::Disabled(DisabledReason::Timeout));
    }

    #[test]
    fn answered_request_never_times_out() {
        let mut guard = DecisionGuard::default();
        let mut state = LocationState::initial(true);

        guard.answer();
        state.apply(LocationEvent::Position(CENTRE));

        assert!(guard.is_answered());
        assert_eq!(guard.on_deadline(), None);
        assert_eq!(state.coordinates(), Some(CENTRE));
    }

    #[test]
    fn late_answer_after_timeout_is_ignored() {
        let mut guard = DecisionGuard::default();
        let mut state = LocationState::Pending;

        if let Some(event) = guard.on_deadline() {
            state.apply(event);
        }
        guard.answer();
        assert!(!state.apply(LocationEvent::Position(CENTRE)));
        assert_eq!(state, LocationState::Disabled(DisabledReason::Timeout));
    }

    #[test]
    fn error_codes_map_to_reasons() {
        assert_eq!(DisabledReason::from_code(1), DisabledReason::PermissionDenied);
        assert_eq!(DisabledReason::from_code(2), DisabledReason::PositionUnavailable);
        assert_eq!(DisabledReason::from_code(3), DisabledReason::Timeout);
        assert_eq!(DisabledReason::from_code(42), DisabledReason::PositionUnavailable);
    }

    #[test]
    fn provider_failure_coexists_with_location() {
        let location = LocationState::Available(CENTRE);
        let mut provider = MapProviderState::default();
        assert!(provider.settle(Err(MapProviderError::TileRequestRejected)));

        assert_eq!(location.coordinates(), Some(CENTRE));
        assert_eq!(location.placeholder(), None);
        assert_eq!(
            provider.error(),
            Some(GeoMapError::MapProviderLoadFailure(
                MapProviderError::TileRequestRejected
            ))
        );
    }

    #[test]
    fn provider_settles_once() {
        let mut provider = MapProviderState::Loading;
        assert!(provider.settle(Ok(())));
        assert!(!provider.settle(Err(MapProviderError::TileRequestRejected)));
        assert_eq!(provider, MapProviderState::Ready);
        assert!(!provider.is_failed());
    }
}
