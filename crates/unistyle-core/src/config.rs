use serde::{Deserialize, Serialize};

use crate::inference::InferenceOptions;

/// Where the formatter attaches and how it marks state.
///
/// Every field has a default, so hosts can deserialize a partial object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatterConfig {
    /// Element whose visibility decides whether the toolbar exists.
    pub modal_selector: String,
    /// The contenteditable the selection must live in.
    pub editor_selector: String,
    /// Searched inside the modal; the toolbar is inserted before it.
    pub container_selector: String,
    pub toolbar_id: String,
    pub toolbar_class: String,
    /// Shared by every button, followed by the style id.
    pub button_class: String,
    /// Toggled on buttons whose style is active.
    pub active_class: String,
    /// Ignore surrounding whitespace when inferring active styles.
    pub trim_selection: bool,
    /// Light up uppercase/lowercase when the selection is already folded.
    pub infer_case_styles: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            modal_selector: ".share-box-v2__modal".to_owned(),
            editor_selector: ".share-box-v2__modal .ql-editor".to_owned(),
            container_selector: ".ql-container".to_owned(),
            toolbar_id: "linkedin-formatter-toolbox".to_owned(),
            toolbar_class: "linkedin-formatter-toolbox".to_owned(),
            button_class: "format-button".to_owned(),
            active_class: "selected".to_owned(),
            trim_selection: true,
            infer_case_styles: false,
        }
    }
}

impl FormatterConfig {
    pub fn inference(&self) -> InferenceOptions {
        InferenceOptions {
            trim: self.trim_selection,
            case_styles: self.infer_case_styles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_takes_defaults() {
        let config: FormatterConfig = serde_json::from_str(
            r##"{ "editorSelector": "#editor", "inferCaseStyles": true }"##,
        )
        .unwrap();

        assert_eq!(config.editor_selector, "#editor");
        assert!(config.infer_case_styles);
        assert_eq!(config.modal_selector, ".share-box-v2__modal");
        assert_eq!(config.active_class, "selected");
        assert!(config.trim_selection);
    }

    #[test]
    fn test_inference_options() {
        let config = FormatterConfig {
            trim_selection: false,
            ..Default::default()
        };
        assert_eq!(
            config.inference(),
            InferenceOptions {
                trim: false,
                case_styles: false
            }
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(FormatterConfig::default()).unwrap();
        assert_eq!(json["toolbarId"], "linkedin-formatter-toolbox");
        assert_eq!(json["buttonClass"], "format-button");
    }
}
