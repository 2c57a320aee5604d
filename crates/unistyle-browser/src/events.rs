//! Browser event handling for the toolbar.
//!
//! Key parsing is pure and usable on any target; the listener helpers wire
//! closures onto DOM elements with `gloo-events`.

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;

use unistyle_core::{Key, KeyCombo, KeydownResult, Modifiers};

/// Events after which the selection or content may have changed.
pub const SELECTION_EVENTS: [&str; 4] = ["mouseup", "keyup", "input", "keydown"];

/// Parse a `KeyboardEvent.key` value.
pub fn parse_key(key: &str) -> Key {
    match key {
        "Enter" => Key::Enter,
        "Escape" => Key::Escape,
        "Tab" => Key::Tab,
        "Backspace" => Key::Backspace,
        "Delete" => Key::Delete,
        "ArrowLeft" => Key::ArrowLeft,
        "ArrowRight" => Key::ArrowRight,
        "ArrowUp" => Key::ArrowUp,
        "ArrowDown" => Key::ArrowDown,
        "Home" => Key::Home,
        "End" => Key::End,
        // Printable keys report exactly one character; named keys are words.
        other if other.chars().count() == 1 => Key::character(other),
        _ => Key::Unidentified,
    }
}

/// Build a combo from the fields of a keyboard event.
pub fn parse_key_combo(key: &str, ctrl: bool, alt: bool, shift: bool, meta: bool) -> KeyCombo {
    KeyCombo::with_modifiers(
        parse_key(key),
        Modifiers {
            ctrl,
            alt,
            shift,
            meta,
        },
    )
}

/// Extract a combo from a DOM keyboard event.
pub fn combo_from_event(event: &web_sys::KeyboardEvent) -> KeyCombo {
    parse_key_combo(
        &event.key(),
        event.ctrl_key(),
        event.alt_key(),
        event.shift_key(),
        event.meta_key(),
    )
}

/// Call `on_change` after every event in [`SELECTION_EVENTS`] on `target`.
pub fn attach_selection_listeners(
    target: &web_sys::EventTarget,
    on_change: Rc<dyn Fn()>,
) -> Vec<EventListener> {
    SELECTION_EVENTS
        .iter()
        .map(|event_type| {
            let on_change = Rc::clone(&on_change);
            EventListener::new(target, *event_type, move |_| on_change())
        })
        .collect()
}

/// Route keydown combos to `on_combo`; prevents the default action when it
/// reports [`KeydownResult::Handled`].
pub fn attach_shortcut_listener(
    target: &web_sys::EventTarget,
    on_combo: impl Fn(&KeyCombo) -> KeydownResult + 'static,
) -> EventListener {
    EventListener::new_with_options(
        target,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            if on_combo(&combo_from_event(event)) == KeydownResult::Handled {
                event.prevent_default();
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse_key("Enter"), Key::Enter);
        assert_eq!(parse_key("ArrowUp"), Key::ArrowUp);
        assert_eq!(parse_key("F5"), Key::Unidentified);
        assert_eq!(parse_key("Shift"), Key::Unidentified);
    }

    #[test]
    fn test_parse_character_keys() {
        assert_eq!(parse_key("b"), Key::character("b"));
        assert_eq!(parse_key("B"), Key::character("B"));
        assert_eq!(parse_key(" "), Key::character(" "));
        assert_eq!(parse_key("é"), Key::character("é"));
    }

    #[test]
    fn test_parse_combo_matches_default_binding() {
        let combo = parse_key_combo("B", true, false, false, false);
        assert_eq!(combo.modifiers, Modifiers::CTRL);

        let bindings = unistyle_core::KeyBindings::default();
        assert!(bindings.lookup(&combo).is_some());
        assert!(
            bindings
                .lookup(&parse_key_combo("b", false, false, false, true))
                .is_some()
        );
        assert!(
            bindings
                .lookup(&parse_key_combo("b", false, false, false, false))
                .is_none()
        );
    }
}
