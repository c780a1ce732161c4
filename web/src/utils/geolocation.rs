//! Browser location service binding. Only compiled into the client bundle.

use std::{cell::Cell, rc::Rc, time::Duration};

use leptos::prelude::set_timeout;
use shared_types::{Coordinates, GeolocationOptions};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{js_sys::Reflect, Geolocation, Position, PositionError, PositionOptions};

use crate::utils::acquisition::{DecisionGuard, DisabledReason, LocationEvent};

/// The location service, if the browser has one.
pub fn location_service() -> Option<Geolocation> {
    let navigator = web_sys::window()?.navigator();
    let present = Reflect::has(navigator.as_ref(), &JsValue::from_str("geolocation")).unwrap_or(false);
    if !present {
        return None;
    }
    navigator.geolocation().ok()
}

/// Asks for the current position and forwards every callback to `on_event`.
/// If neither callback fires within the user decision timeout the request
/// is reported as timed out.
pub fn request_position(
    service: &Geolocation,
    options: &GeolocationOptions,
    on_event: impl Fn(LocationEvent) + Clone + 'static,
) -> Result<(), JsValue> {
    let position_options = PositionOptions::new();
    position_options.set_enable_high_accuracy(options.enable_high_accuracy);
    position_options.set_timeout(options.user_decision_timeout_ms);

    let guard = Rc::new(Cell::new(DecisionGuard::default()));

    let on_success = {
        let on_event = on_event.clone();
        let guard = guard.clone();
        Closure::wrap(Box::new(move |position: Position| {
            answer(&guard);
            let coords = position.coords();
            leptos::logging::log!(
                "Coordinates received: {}, {} (accuracy {} m)",
                coords.latitude(),
                coords.longitude(),
                coords.accuracy()
            );
            on_event(LocationEvent::Position(Coordinates::new(
                coords.latitude(),
                coords.longitude(),
            )));
        }) as Box<dyn FnMut(Position)>)
    };

    let on_error = {
        let on_event = on_event.clone();
        let guard = guard.clone();
        Closure::wrap(Box::new(move |error: PositionError| {
            answer(&guard);
            let reason = DisabledReason::from_code(error.code());
            leptos::logging::warn!("Geolocation error {:?}: {}", reason, error.message());
            on_event(LocationEvent::PositionError(reason));
        }) as Box<dyn FnMut(PositionError)>)
    };

    if options.watch {
        service.watch_position_with_error_callback_and_options(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
            &position_options,
        )?;
    } else {
        service.get_current_position_with_error_callback_and_options(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
            &position_options,
        )?;
    }

    // The browser holds on to these for as long as the page lives.
    on_success.forget();
    on_error.forget();

    let timeout_ms = options.user_decision_timeout_ms;
    set_timeout(
        move || {
            if let Some(event) = guard.get().on_deadline() {
                leptos::logging::warn!("No location decision after {} ms", timeout_ms);
                on_event(event);
            }
        },
        Duration::from_millis(u64::from(timeout_ms)),
    );

    Ok(())
}

fn answer(guard: &Cell<DecisionGuard>) {
    let mut current = guard.get();
    current.answer();
    guard.set(current);
}
