//! unistyle-core: Pure Rust formatting logic without DOM dependencies.
//!
//! This crate provides:
//! - Style definitions and the `StyleRegistry` of named styles
//! - `codec` - reversible ASCII ⇄ styled Unicode mapping plus ASCII case folding
//! - `inference` - which styles a selection currently shows (`ToolState`)
//! - `FormatController` - toolbar command and refresh logic over a `SelectionHost`
//! - Platform traits the browser layer (or any other host) implements

pub mod actions;
pub mod codec;
pub mod config;
pub mod controller;
pub mod error;
pub mod inference;
pub mod platform;
pub mod registry;
pub mod style;

pub use actions::{FormatAction, Key, KeyBindings, KeyCombo, KeydownResult, Modifiers};
pub use codec::{decode, encode, to_lowercase, to_uppercase};
pub use config::FormatterConfig;
pub use controller::{FormatController, ToolbarButton};
pub use error::FormatError;
pub use inference::{InferenceOptions, ToolState, is_fully_styled, is_style_active};
pub use platform::{EditorWatcher, PlatformError, PresenceChange, PresenceTracker, SelectionHost};
pub use registry::StyleRegistry;
pub use smol_str::SmolStr;
pub use style::{
    BOLD, BOLD_ID, BOLD_ITALIC, CaseStyle, LOWERCASE_ID, MONOSPACE, OffsetStyle, Reversibility,
    SANS_BOLD, StyleDefinition, StyleTransform, UPPERCASE_ID,
};
