//! Editor presence detection.
//!
//! The target editor lives in a modal that the host page creates and tears
//! down at will. A `MutationObserver` on the document body samples whether
//! the editor is currently usable; `PresenceTracker` in core turns those
//! samples into appear/disappear edges.

use wasm_bindgen::prelude::*;
use web_sys::{MutationObserver, MutationObserverInit, MutationRecord};

use unistyle_core::{FormatterConfig, PlatformError};

use crate::js_err;

/// Whether the modal is shown and its editor container has been rendered.
///
/// A modal hidden with `display: none` counts as absent.
pub fn editor_visible(config: &FormatterConfig) -> bool {
    let Ok(Some(modal)) = gloo_utils::document().query_selector(&config.modal_selector) else {
        return false;
    };

    let displayed = match gloo_utils::window().get_computed_style(&modal) {
        Ok(Some(style)) => style
            .get_property_value("display")
            .map(|display| display != "none")
            .unwrap_or(true),
        _ => true,
    };

    displayed
        && matches!(
            modal.query_selector(&config.container_selector),
            Ok(Some(_))
        )
}

/// Calls back on every child-list mutation below a target node.
///
/// Disconnects on drop.
pub struct PresenceObserver {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
}

impl PresenceObserver {
    /// Observe `target` and its whole subtree.
    pub fn observe(
        target: &web_sys::Node,
        mut on_mutation: impl FnMut() + 'static,
    ) -> Result<Self, PlatformError> {
        let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
            move |records: js_sys::Array, _observer: MutationObserver| {
                let structural = records.iter().any(|record| {
                    record
                        .dyn_ref::<MutationRecord>()
                        .is_some_and(|record| record.type_() == "childList")
                });
                if structural {
                    on_mutation();
                }
            },
        );

        let observer = MutationObserver::new(callback.as_ref().unchecked_ref()).map_err(js_err)?;
        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer.observe_with_options(target, &init).map_err(js_err)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for PresenceObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
