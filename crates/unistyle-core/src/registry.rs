//! The table of styles a toolbar offers.

use smol_str::SmolStr;
use tracing::debug;

use crate::codec;
use crate::error::FormatError;
use crate::inference::{InferenceOptions, ToolState, is_style_active};
use crate::style::StyleDefinition;

/// Ordered set of styles, looked up by stable string id.
///
/// Order is the order buttons are rendered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRegistry {
    styles: Vec<StyleDefinition>,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StyleRegistry {
    /// A registry with no styles.
    pub fn empty() -> Self {
        Self { styles: Vec::new() }
    }

    /// Bold, uppercase, lowercase.
    pub fn builtin() -> Self {
        Self {
            styles: vec![
                StyleDefinition::bold(),
                StyleDefinition::uppercase(),
                StyleDefinition::lowercase(),
            ],
        }
    }

    /// Add a style after the existing ones.
    ///
    /// Offset styles must map onto a valid, non-ASCII alphabet, otherwise
    /// decode could not recover the original letters.
    pub fn register(&mut self, style: StyleDefinition) -> Result<(), FormatError> {
        if self.styles.iter().any(|s| s.id == style.id) {
            return Err(FormatError::DuplicateStyle(style.id));
        }
        if let Some(offsets) = style.offset_style() {
            offsets
                .validate()
                .map_err(|reason| FormatError::InvalidStyle {
                    id: style.id.clone(),
                    reason,
                })?;
        }
        debug!(id = %style.id, "registered style");
        self.styles.push(style);
        Ok(())
    }

    /// Builder form of [`StyleRegistry::register`].
    pub fn with_style(mut self, style: StyleDefinition) -> Result<Self, FormatError> {
        self.register(style)?;
        Ok(self)
    }

    pub fn get(&self, id: &str) -> Result<&StyleDefinition, FormatError> {
        self.styles
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| FormatError::UnknownStyle(SmolStr::new(id)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleDefinition> {
        self.styles.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.styles.iter().map(|s| s.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Forward transform of the style registered as `id`.
    pub fn apply_style(&self, fragment: &str, id: &str) -> Result<String, FormatError> {
        Ok(codec::apply(fragment, self.get(id)?))
    }

    /// Undo the style registered as `id` (identity for case styles).
    pub fn revert_style(&self, fragment: &str, id: &str) -> Result<String, FormatError> {
        Ok(codec::revert(fragment, self.get(id)?))
    }

    /// Toolbar semantics: revert when the fragment already shows the style,
    /// apply otherwise.
    pub fn toggle_style(
        &self,
        fragment: &str,
        id: &str,
        options: InferenceOptions,
    ) -> Result<String, FormatError> {
        let style = self.get(id)?;
        if is_style_active(fragment, style, options) {
            Ok(codec::revert(fragment, style))
        } else {
            Ok(codec::apply(fragment, style))
        }
    }

    /// Active flag for every registered style.
    pub fn query_active_styles(&self, fragment: &str, options: InferenceOptions) -> ToolState {
        ToolState::infer(self, fragment, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BOLD, MONOSPACE, OffsetStyle};

    #[test]
    fn test_builtin_order() {
        let registry = StyleRegistry::builtin();
        assert_eq!(
            registry.ids().collect::<Vec<_>>(),
            vec!["bold", "uppercase", "lowercase"]
        );
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
        assert!(StyleRegistry::empty().is_empty());
    }

    #[test]
    fn test_unknown_style_is_an_error() {
        let registry = StyleRegistry::builtin();
        assert_eq!(
            registry.apply_style("text", "italic"),
            Err(FormatError::UnknownStyle("italic".into()))
        );
        assert!(registry.revert_style("text", "").is_err());
        assert!(
            registry
                .toggle_style("text", "Bold", InferenceOptions::default())
                .is_err()
        );
    }

    #[test]
    fn test_apply_style() {
        let registry = StyleRegistry::builtin();
        assert_eq!(registry.apply_style("Shout", "uppercase").unwrap(), "SHOUT");
        assert_eq!(registry.apply_style("Shout", "lowercase").unwrap(), "shout");
        let bold = registry.apply_style("Shout", "bold").unwrap();
        assert_eq!(registry.revert_style(&bold, "bold").unwrap(), "Shout");
    }

    #[test]
    fn test_toggle_bold_twice_restores() {
        let registry = StyleRegistry::builtin();
        let options = InferenceOptions::default();
        let once = registry.toggle_style("Word", "bold", options).unwrap();
        assert_eq!(once, crate::codec::encode("Word", &BOLD));
        let twice = registry.toggle_style(&once, "bold", options).unwrap();
        assert_eq!(twice, "Word");
    }

    #[test]
    fn test_toggle_partial_bold_applies() {
        let registry = StyleRegistry::builtin();
        let mixed = format!("He{}", crate::codec::encode("llo", &BOLD));
        let toggled = registry
            .toggle_style(&mixed, "bold", InferenceOptions::default())
            .unwrap();
        assert_eq!(toggled, crate::codec::encode("Hello", &BOLD));
    }

    #[test]
    fn test_toggle_case_style_reapplies() {
        let registry = StyleRegistry::builtin();
        let options = InferenceOptions {
            case_styles: true,
            ..Default::default()
        };
        assert_eq!(registry.toggle_style("Mixed", "uppercase", options).unwrap(), "MIXED");
        // Already uppercase: revert is identity.
        assert_eq!(registry.toggle_style("MIXED", "uppercase", options).unwrap(), "MIXED");
    }

    #[test]
    fn test_register_extra_style() {
        let registry = StyleRegistry::builtin()
            .with_style(StyleDefinition::offset("monospace", "Monospace", "𝙼", MONOSPACE))
            .unwrap();
        assert_eq!(registry.len(), 4);
        let options = InferenceOptions::default();
        let mono = registry.apply_style("grep", "monospace").unwrap();
        let state = registry.query_active_styles(&mono, options);
        assert_eq!(state.active_ids().collect::<Vec<_>>(), vec!["monospace"]);

        let empty = registry.query_active_styles("", options);
        assert_eq!(empty.active_ids().count(), 0);
    }

    #[test]
    fn test_register_rejects_duplicates_and_invalid() {
        let mut registry = StyleRegistry::builtin();
        assert_eq!(
            registry.register(StyleDefinition::bold()),
            Err(FormatError::DuplicateStyle("bold".into()))
        );

        let broken = StyleDefinition::offset("shifted", "Shifted", "S", OffsetStyle::new(1, 1));
        assert!(matches!(
            registry.register(broken),
            Err(FormatError::InvalidStyle { ref id, .. }) if id == "shifted"
        ));
        assert_eq!(registry.len(), 3);
    }
}
