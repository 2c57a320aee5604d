//! Active-style inference for a selection.
//!
//! Which toolbar buttons look "pressed" is derived from the selected text
//! alone, every time the selection changes. Nothing is remembered between
//! calls, so external edits can never leave a stale highlight behind.

use std::collections::BTreeMap;

use smol_str::SmolStr;

use crate::registry::StyleRegistry;
use crate::style::{CaseStyle, OffsetStyle, StyleDefinition, StyleTransform};

/// Whether every character of `fragment` lies in the style's alphabet.
///
/// An empty fragment is never fully styled: without this guard the "every
/// character" test would hold vacuously and an empty selection would light
/// the button up.
pub fn is_fully_styled(fragment: &str, style: &OffsetStyle) -> bool {
    !fragment.is_empty() && fragment.chars().all(|c| style.contains(c))
}

/// Equality test for case styles: the fragment has at least one ASCII letter
/// and folding it would not change it.
pub fn is_case_styled(fragment: &str, case: CaseStyle) -> bool {
    let mut letters = fragment.chars().filter(char::is_ascii_alphabetic).peekable();
    if letters.peek().is_none() {
        return false;
    }
    match case {
        CaseStyle::Upper => letters.all(|c| c.is_ascii_uppercase()),
        CaseStyle::Lower => letters.all(|c| c.is_ascii_lowercase()),
    }
}

/// Knobs for [`ToolState::infer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InferenceOptions {
    /// Ignore leading and trailing whitespace of the selection.
    pub trim: bool,
    /// Report case styles as active when the fragment is already folded.
    pub case_styles: bool,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            trim: true,
            case_styles: false,
        }
    }
}

/// Whether a single style is active for `fragment`.
pub fn is_style_active(
    fragment: &str,
    style: &StyleDefinition,
    options: InferenceOptions,
) -> bool {
    let fragment = if options.trim {
        fragment.trim()
    } else {
        fragment
    };
    match &style.transform {
        StyleTransform::Offset(offsets) => is_fully_styled(fragment, offsets),
        StyleTransform::Case(case) => options.case_styles && is_case_styled(fragment, *case),
    }
}

/// Per-style active flags, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolState {
    flags: Vec<(SmolStr, bool)>,
}

impl ToolState {
    /// Evaluate every registered style against `fragment`.
    pub fn infer(registry: &StyleRegistry, fragment: &str, options: InferenceOptions) -> Self {
        let flags = registry
            .iter()
            .map(|style| (style.id.clone(), is_style_active(fragment, style, options)))
            .collect();
        Self { flags }
    }

    /// Every registered style inactive (no selection).
    pub fn inactive(registry: &StyleRegistry) -> Self {
        Self {
            flags: registry.iter().map(|style| (style.id.clone(), false)).collect(),
        }
    }

    /// Unknown ids are reported as inactive.
    pub fn is_active(&self, id: &str) -> bool {
        self.flags
            .iter()
            .any(|(style, active)| *active && style == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(id, active)| (id.as_str(), *active))
    }

    pub fn active_ids(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, active)| *active).map(|(id, _)| id)
    }

    pub fn to_map(&self) -> BTreeMap<String, bool> {
        self.iter().map(|(id, active)| (id.to_string(), active)).collect()
    }
}
