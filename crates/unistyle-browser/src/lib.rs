//! Browser DOM layer for the unistyle formatting toolbar.
//!
//! This crate wires `unistyle-core` to a live page. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `selection`: `SelectionHost` over the DOM Selection API
//! - `toolbar`: toolbar element creation and active-class syncing
//! - `observer`: `MutationObserver` based editor presence detection
//! - `events`: key parsing and editor event listeners
//! - `session`: ties everything together as an `EditorWatcher`
//!
//! # Re-exports
//!
//! This crate re-exports `unistyle-core` for convenience, so consumers
//! only need to depend on `unistyle-browser`.

// Re-export core crate
pub use unistyle_core;
pub use unistyle_core::*;

pub mod events;
pub mod observer;
pub mod selection;
pub mod session;
pub mod toolbar;

pub use events::{parse_key, parse_key_combo};
pub use observer::{PresenceObserver, editor_visible};
pub use selection::BrowserSelection;
pub use session::FormatterSession;
pub use toolbar::ToolbarDom;

/// Convert a thrown JS value into a platform error.
pub(crate) fn js_err(err: wasm_bindgen::JsValue) -> PlatformError {
    PlatformError(format!("{err:?}"))
}
