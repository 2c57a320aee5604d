//! Error types for unistyle.
//!
//! Unknown characters are never an error; they pass through every transform.
//! What is reported here is host misuse (asking for a style that does not
//! exist, registering a broken one) and failures of the host platform.

use miette::Diagnostic;
use smol_str::SmolStr;

use crate::platform::PlatformError;

/// Main error type for formatting operations.
#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No style is registered under the given id.
    #[error("no style registered for id `{0}`")]
    #[diagnostic(
        code(unistyle::unknown_style),
        help("registered ids can be listed with `StyleRegistry::ids`")
    )]
    UnknownStyle(SmolStr),

    /// A style with this id is already registered.
    #[error("style `{0}` is already registered")]
    #[diagnostic(code(unistyle::duplicate_style))]
    DuplicateStyle(SmolStr),

    /// Offset style rejected at registration.
    #[error("invalid style `{id}`: {reason}")]
    #[diagnostic(code(unistyle::invalid_style))]
    InvalidStyle { id: SmolStr, reason: &'static str },

    /// The host could not read or replace the selection.
    #[error(transparent)]
    #[diagnostic(code(unistyle::platform))]
    Platform(#[from] PlatformError),
}
