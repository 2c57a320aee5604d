//! WASM bindings for the unistyle formatting toolbar.
//!
//! Built with `wasm-pack` and loaded as a browser-extension content script:
//!
//! ```js
//! import init, { JsFormatter } from "./unistyle_js.js";
//! await init();
//! const formatter = new JsFormatter();
//! formatter.mount();
//! ```
//!
//! The pure transforms (`applyStyle`, `toggleStyle`, `queryActiveStyles`)
//! work without mounting anything.

mod formatter;
mod types;

pub use formatter::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    let _ = set_global_default(Registry::default().with(wasm_layer));
}
