//! JsFormatter - the formatter wrapper for JavaScript.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use unistyle_browser::FormatterSession;
use unistyle_core::{
    FormatAction, FormatController, FormatterConfig, StyleRegistry, is_style_active,
};

use crate::types::JsStyleList;

fn js_error(err: impl std::fmt::Display) -> JsError {
    JsError::new(&err.to_string())
}

/// The formatter instance exposed to JavaScript.
///
/// Owns the builtin style registry and, once mounted, the live page session.
#[wasm_bindgen]
pub struct JsFormatter {
    controller: FormatController,
    session: Option<FormatterSession>,
}

#[wasm_bindgen]
impl JsFormatter {
    /// Create a formatter. `config` is an optional partial `FormatterConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsFormatter, JsError> {
        let config: FormatterConfig = if config.is_undefined() || config.is_null() {
            FormatterConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?
        };

        Ok(Self {
            controller: FormatController::new(StyleRegistry::builtin(), config),
            session: None,
        })
    }

    // === Pure transforms ===

    /// Apply a style to `text`.
    #[wasm_bindgen(js_name = applyStyle)]
    pub fn apply_style(&self, text: &str, style_id: &str) -> Result<String, JsError> {
        self.controller
            .transform(text, &FormatAction::Apply(style_id.into()))
            .map_err(js_error)
    }

    /// Undo a style (identity for case styles).
    #[wasm_bindgen(js_name = revertStyle)]
    pub fn revert_style(&self, text: &str, style_id: &str) -> Result<String, JsError> {
        self.controller
            .transform(text, &FormatAction::Revert(style_id.into()))
            .map_err(js_error)
    }

    /// Apply, or revert if `text` already shows the style.
    #[wasm_bindgen(js_name = toggleStyle)]
    pub fn toggle_style(&self, text: &str, style_id: &str) -> Result<String, JsError> {
        self.controller
            .transform(text, &FormatAction::toggle(style_id))
            .map_err(js_error)
    }

    // === State inference ===

    /// `{ [styleId]: boolean }` for every registered style.
    #[wasm_bindgen(js_name = queryActiveStyles)]
    pub fn query_active_styles(&self, text: &str) -> Result<JsValue, JsError> {
        let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
        self.controller
            .active_styles(text)
            .to_map()
            .serialize(&serializer)
            .map_err(js_error)
    }

    /// Whether one style is active for `text`.
    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self, text: &str, style_id: &str) -> Result<bool, JsError> {
        let style = self.controller.registry().get(style_id).map_err(js_error)?;
        Ok(is_style_active(text, style, self.controller.inference()))
    }

    /// Registered styles in toolbar order.
    #[wasm_bindgen(js_name = listStyles)]
    pub fn list_styles(&self) -> JsStyleList {
        JsStyleList::from_controller(&self.controller)
    }

    // === Page integration ===

    /// Start watching the page and inject the toolbar when the editor opens.
    pub fn mount(&mut self) -> Result<(), JsError> {
        if self.session.is_none() {
            let session = FormatterSession::start(self.controller.clone()).map_err(js_error)?;
            self.session = Some(session);
        }
        Ok(())
    }

    /// Stop watching and remove the toolbar.
    pub fn unmount(&mut self) {
        self.session = None;
    }

    /// Whether the toolbar is currently in the page.
    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(FormatterSession::is_mounted)
    }
}
