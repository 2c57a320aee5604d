//! Platform abstraction traits for the formatter.
//!
//! The core never touches a document tree. Hosts (the browser crate, tests, a
//! native UI) implement these traits to hand over the current selection and to
//! report when the target editor comes and goes.

use tracing::debug;

/// Error type for platform operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct PlatformError(pub String);

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError(s)
    }
}

/// Read and replace the user's current selection.
///
/// Only single-range selections are modelled.
pub trait SelectionHost {
    /// The highlighted text, or `None` if nothing is selected in the editor.
    fn selected_text(&self) -> Result<Option<String>, PlatformError>;

    /// Replace the highlighted text and keep the replacement selected.
    fn replace_selection(&mut self, replacement: &str) -> Result<(), PlatformError>;
}

/// Notified when the target editor appears or disappears.
///
/// Implemented by the host on top of whatever observation primitive it has
/// (DOM mutation observers, polling, native view events).
pub trait EditorWatcher {
    fn on_editor_appeared(&mut self);
    fn on_editor_disappeared(&mut self);
}

/// Edge reported by [`PresenceTracker::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceChange {
    Appeared,
    Disappeared,
}

/// Turns a stream of "is the editor visible right now" samples into
/// appear/disappear edges.
///
/// Mutation observers fire many times per visible change, so watchers are only
/// called when the sampled visibility actually flips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresenceTracker {
    present: bool,
}

impl PresenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Record a visibility sample, notifying `watcher` on a transition.
    pub fn update<W: EditorWatcher + ?Sized>(
        &mut self,
        visible: bool,
        watcher: &mut W,
    ) -> Option<PresenceChange> {
        if visible == self.present {
            return None;
        }
        self.present = visible;

        if visible {
            debug!("editor appeared");
            watcher.on_editor_appeared();
            Some(PresenceChange::Appeared)
        } else {
            debug!("editor disappeared");
            watcher.on_editor_disappeared();
            Some(PresenceChange::Disappeared)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingWatcher {
        appeared: usize,
        disappeared: usize,
    }

    impl EditorWatcher for CountingWatcher {
        fn on_editor_appeared(&mut self) {
            self.appeared += 1;
        }

        fn on_editor_disappeared(&mut self) {
            self.disappeared += 1;
        }
    }

    #[test]
    fn test_presence_only_fires_on_transitions() {
        let mut tracker = PresenceTracker::new();
        let mut watcher = CountingWatcher::default();

        assert_eq!(tracker.update(false, &mut watcher), None);
        assert_eq!(
            tracker.update(true, &mut watcher),
            Some(PresenceChange::Appeared)
        );
        // Mutation flood while the modal stays open.
        assert_eq!(tracker.update(true, &mut watcher), None);
        assert_eq!(tracker.update(true, &mut watcher), None);
        assert!(tracker.is_present());

        assert_eq!(
            tracker.update(false, &mut watcher),
            Some(PresenceChange::Disappeared)
        );
        assert_eq!(tracker.update(false, &mut watcher), None);

        assert_eq!(watcher.appeared, 1);
        assert_eq!(watcher.disappeared, 1);
    }

    #[test]
    fn test_presence_reopen() {
        let mut tracker = PresenceTracker::new();
        let mut watcher = CountingWatcher::default();

        for visible in [true, false, true, false, true] {
            tracker.update(visible, &mut watcher);
        }
        assert_eq!(watcher.appeared, 3);
        assert_eq!(watcher.disappeared, 2);
    }

    #[test]
    fn test_platform_error_display() {
        let err = PlatformError::from("editor not found");
        assert_eq!(err.to_string(), "editor not found");
        assert_eq!(PlatformError::from(String::from("x")), PlatformError("x".into()));
    }
}
