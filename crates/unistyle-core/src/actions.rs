//! Formatting actions and keyboard input types.
//!
//! Platform-agnostic definitions. `FormatAction` is what a toolbar click or a
//! shortcut asks for; `Key`/`KeyCombo` describe the keyboard side so hosts can
//! translate their native key events once and share the bindings.

use smol_str::SmolStr;

use crate::style::BOLD_ID;

/// A formatting operation on the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatAction {
    /// Apply the style, or revert it if the selection already shows it.
    Toggle(SmolStr),
    /// Apply the style unconditionally.
    Apply(SmolStr),
    /// Undo the style unconditionally.
    Revert(SmolStr),
}

impl FormatAction {
    pub fn toggle(id: impl Into<SmolStr>) -> Self {
        Self::Toggle(id.into())
    }

    /// The style this action targets.
    pub fn style_id(&self) -> &str {
        match self {
            Self::Toggle(id) | Self::Apply(id) | Self::Revert(id) => id,
        }
    }
}

/// Key values for keyboard input.
///
/// Only what the formatter cares about; everything else is `Unidentified`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character key.
    Character(SmolStr),
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Unidentified,
}

impl Key {
    pub fn character(s: impl Into<SmolStr>) -> Self {
        Self::Character(s.into())
    }

    /// Character keys compare case-insensitively for bindings (Shift+B reports "B").
    pub fn normalized(&self) -> Self {
        match self {
            Self::Character(s) => Self::Character(SmolStr::new(s.to_ascii_lowercase())),
            other => other.clone(),
        }
    }
}

/// Modifier key state for a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    pub const META: Self = Self {
        meta: true,
        ..Self::NONE
    };

    /// Whether `self` holds every modifier set in `other`, with the same Alt
    /// state. Alt changes the produced character on some layouts, so it never
    /// counts as extra.
    fn covers(&self, other: &Self) -> bool {
        self.alt == other.alt
            && (self.ctrl || !other.ctrl)
            && (self.shift || !other.shift)
            && (self.meta || !other.meta)
    }
}

/// A key combination for triggering an action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn ctrl(key: Key) -> Self {
        Self::with_modifiers(key, Modifiers::CTRL)
    }

    pub fn meta(key: Key) -> Self {
        Self::with_modifiers(key, Modifiers::META)
    }

    fn normalized(&self) -> Self {
        Self {
            key: self.key.normalized(),
            modifiers: self.modifiers,
        }
    }
}

/// Result of handling a keydown event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeydownResult {
    /// A binding ran, prevent the platform default.
    Handled,
    /// Not a binding, let the platform handle it.
    NotHandled,
}

/// Shortcut table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: Vec<(KeyCombo, FormatAction)>,
}

impl Default for KeyBindings {
    /// Ctrl+B and Cmd+B toggle bold.
    fn default() -> Self {
        Self::empty()
            .bind(KeyCombo::ctrl(Key::character("b")), FormatAction::toggle(BOLD_ID))
            .bind(KeyCombo::meta(Key::character("b")), FormatAction::toggle(BOLD_ID))
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Add a binding; a later binding for the same combo wins.
    pub fn bind(mut self, combo: KeyCombo, action: FormatAction) -> Self {
        let combo = combo.normalized();
        self.bindings.retain(|(existing, _)| *existing != combo);
        self.bindings.push((combo, action));
        self
    }

    /// Exact matches win. Otherwise a Ctrl or Cmd binding also fires when
    /// Shift or the other primary modifier is held too, so Ctrl+Shift+B and
    /// Ctrl+Cmd+B still reach bold instead of the host editor.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<&FormatAction> {
        let combo = combo.normalized();
        let exact = self.bindings.iter().find(|(bound, _)| *bound == combo);
        exact
            .or_else(|| {
                self.bindings.iter().find(|(bound, _)| {
                    bound.key == combo.key
                        && (bound.modifiers.ctrl || bound.modifiers.meta)
                        && combo.modifiers.covers(&bound.modifiers)
                })
            })
            .map(|(_, action)| action)
    }
}
