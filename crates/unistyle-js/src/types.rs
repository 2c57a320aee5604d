//! Types exposed to JavaScript via wasm-bindgen.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use unistyle_core::{FormatController, Reversibility};

/// One registered style, as a host UI needs it to draw a button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsStyleInfo {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub class_name: String,
    /// False for case styles, which can only be re-applied.
    pub reversible: bool,
}

/// Registered styles in toolbar order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct JsStyleList {
    pub styles: Vec<JsStyleInfo>,
}

impl JsStyleList {
    pub fn from_controller(controller: &FormatController) -> Self {
        let styles = controller
            .buttons()
            .into_iter()
            .zip(controller.registry().iter())
            .map(|(button, style)| JsStyleInfo {
                id: button.style_id.to_string(),
                title: button.title.to_string(),
                icon: button.icon.to_string(),
                class_name: button.class_name,
                reversible: style.reversibility() == Reversibility::RangeDecode,
            })
            .collect();
        Self { styles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_list_from_builtin() {
        let list = JsStyleList::from_controller(&FormatController::default());
        let ids: Vec<_> = list.styles.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["bold", "uppercase", "lowercase"]);
        assert!(list.styles[0].reversible);
        assert!(!list.styles[1].reversible);
        assert_eq!(list.styles[2].class_name, "format-button lowercase");
    }
}
