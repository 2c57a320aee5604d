//! Format controller: the toolbar's behaviour without the toolbar.
//!
//! Hosts forward two kinds of events here. A command (button click or
//! shortcut) reads the selection, computes the replacement and writes it back.
//! A selection change recomputes which buttons are active. The returned
//! `ToolState` is the only thing the host needs to render; it is never cached.

use smol_str::SmolStr;
use tracing::{debug, warn};

use crate::actions::{FormatAction, KeyBindings, KeyCombo};
use crate::config::FormatterConfig;
use crate::error::FormatError;
use crate::inference::{InferenceOptions, ToolState};
use crate::platform::SelectionHost;
use crate::registry::StyleRegistry;

/// What a host needs to render one toolbar button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarButton {
    pub style_id: SmolStr,
    pub title: SmolStr,
    pub icon: SmolStr,
    /// `"<button class> <style id>"`.
    pub class_name: String,
}

#[derive(Debug, Clone)]
pub struct FormatController {
    registry: StyleRegistry,
    bindings: KeyBindings,
    config: FormatterConfig,
}

impl Default for FormatController {
    fn default() -> Self {
        Self::new(StyleRegistry::builtin(), FormatterConfig::default())
    }
}

impl FormatController {
    pub fn new(registry: StyleRegistry, config: FormatterConfig) -> Self {
        Self {
            registry,
            bindings: KeyBindings::default(),
            config,
        }
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn inference(&self) -> InferenceOptions {
        self.config.inference()
    }

    /// Buttons in registry order.
    pub fn buttons(&self) -> Vec<ToolbarButton> {
        self.registry
            .iter()
            .map(|style| ToolbarButton {
                style_id: style.id.clone(),
                title: style.title.clone(),
                icon: style.icon.clone(),
                class_name: format!("{} {}", self.config.button_class, style.id),
            })
            .collect()
    }

    /// Active flags for an arbitrary fragment.
    pub fn active_styles(&self, fragment: &str) -> ToolState {
        self.registry.query_active_styles(fragment, self.inference())
    }

    /// Compute the replacement text for `action` without touching any host.
    pub fn transform(&self, fragment: &str, action: &FormatAction) -> Result<String, FormatError> {
        match action {
            FormatAction::Toggle(id) => self.registry.toggle_style(fragment, id, self.inference()),
            FormatAction::Apply(id) => self.registry.apply_style(fragment, id),
            FormatAction::Revert(id) => self.registry.revert_style(fragment, id),
        }
    }

    /// Run `action` against the host's current selection.
    ///
    /// Returns the state of the replaced selection, or `None` if nothing was
    /// selected. An unknown style id is reported even without a selection.
    pub fn execute<H: SelectionHost + ?Sized>(
        &self,
        host: &mut H,
        action: &FormatAction,
    ) -> Result<Option<ToolState>, FormatError> {
        let style = self.registry.get(action.style_id())?;

        let Some(fragment) = host.selected_text()?.filter(|text| !text.is_empty()) else {
            warn!(style = %style.id, "no text selected for formatting");
            return Ok(None);
        };

        let replacement = self.transform(&fragment, action)?;
        host.replace_selection(&replacement)?;
        debug!(style = %style.id, chars = replacement.chars().count(), "formatted selection");

        Ok(Some(self.active_styles(&replacement)))
    }

    /// Toolbar click on the button for `style_id`.
    pub fn handle_command<H: SelectionHost + ?Sized>(
        &self,
        host: &mut H,
        style_id: &str,
    ) -> Result<Option<ToolState>, FormatError> {
        self.execute(host, &FormatAction::toggle(style_id))
    }

    /// Recompute button state after a selection or content change.
    pub fn refresh<H: SelectionHost + ?Sized>(&self, host: &H) -> Result<ToolState, FormatError> {
        Ok(match host.selected_text()? {
            Some(fragment) => self.active_styles(&fragment),
            None => ToolState::inactive(&self.registry),
        })
    }

    /// The action bound to `combo`, if any.
    pub fn resolve_keydown(&self, combo: &KeyCombo) -> Option<&FormatAction> {
        self.bindings.lookup(combo)
    }
}
