//! A running formatter on one page.
//!
//! `FormatterSession` observes the document body, mounts the toolbar when the
//! editor appears and tears it down when it goes away. All per-page state is
//! owned here; DOM callbacks hold weak references so dropping the session
//! releases everything.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use tracing::{debug, warn};

use unistyle_core::{
    EditorWatcher, FormatAction, FormatController, KeyCombo, KeydownResult, PlatformError,
    PresenceTracker, ToolState,
};

use crate::events::{attach_selection_listeners, attach_shortcut_listener};
use crate::js_err;
use crate::observer::{PresenceObserver, editor_visible};
use crate::selection::BrowserSelection;
use crate::toolbar::ToolbarDom;

struct MountedToolbar {
    toolbar: ToolbarDom,
    _editor_listeners: Vec<EventListener>,
}

struct Shared {
    controller: FormatController,
    tracker: Cell<PresenceTracker>,
    mounted: RefCell<Option<MountedToolbar>>,
}

impl Shared {
    fn selection(&self) -> BrowserSelection {
        BrowserSelection::new(&self.controller.config().editor_selector)
    }

    /// Run a formatting action on the live selection and repaint the buttons.
    fn run(&self, action: &FormatAction) {
        match self.controller.execute(&mut self.selection(), action) {
            Ok(Some(state)) => self.render(&state),
            Ok(None) => {}
            Err(err) => warn!(style = action.style_id(), "formatting failed: {err}"),
        }
    }

    fn refresh(&self) {
        match self.controller.refresh(&self.selection()) {
            Ok(state) => self.render(&state),
            Err(err) => debug!("skipping toolbar refresh: {err}"),
        }
    }

    fn render(&self, state: &ToolState) {
        let mounted = self.mounted.borrow();
        let Some(mounted) = mounted.as_ref() else {
            return;
        };
        if let Err(err) = mounted.toolbar.sync(state) {
            debug!("could not update button state: {err}");
        }
    }

    fn on_keydown(&self, combo: &KeyCombo) -> KeydownResult {
        match self.controller.resolve_keydown(combo) {
            Some(action) => {
                self.run(action);
                KeydownResult::Handled
            }
            None => KeydownResult::NotHandled,
        }
    }

    fn mount(self: &Rc<Self>) -> Result<(), PlatformError> {
        let config = self.controller.config();
        let document = gloo_utils::document();

        if document.get_element_by_id(&config.toolbar_id).is_some() {
            debug!("toolbar already present");
            return Ok(());
        }

        let modal = document
            .query_selector(&config.modal_selector)
            .map_err(js_err)?
            .ok_or_else(|| PlatformError::from("modal not found"))?;
        let container = modal
            .query_selector(&config.container_selector)
            .map_err(js_err)?
            .ok_or_else(|| PlatformError::from("editor container not found"))?;
        let editor = document
            .query_selector(&config.editor_selector)
            .map_err(js_err)?
            .ok_or_else(|| PlatformError::from("editor not found"))?;

        let weak = Rc::downgrade(self);
        let toolbar = ToolbarDom::build(
            &document,
            &self.controller,
            Rc::new(move |style_id: &str| {
                if let Some(shared) = weak.upgrade() {
                    shared.run(&FormatAction::toggle(style_id));
                }
            }),
        )?;
        toolbar.insert_before(&container)?;

        let mut listeners = vec![attach_shortcut_listener(&editor, {
            let weak = Rc::downgrade(self);
            move |combo: &KeyCombo| match weak.upgrade() {
                Some(shared) => shared.on_keydown(combo),
                None => KeydownResult::NotHandled,
            }
        })];
        let weak = Rc::downgrade(self);
        listeners.extend(attach_selection_listeners(
            &editor,
            Rc::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.refresh();
                }
            }),
        ));

        *self.mounted.borrow_mut() = Some(MountedToolbar {
            toolbar,
            _editor_listeners: listeners,
        });
        debug!(id = %config.toolbar_id, "toolbar mounted");

        self.refresh();
        Ok(())
    }

    fn unmount(&self) {
        let mounted = self.mounted.borrow_mut().take();
        if let Some(mounted) = mounted {
            mounted.toolbar.remove();
            debug!("toolbar removed");
        }
    }

    /// Take a visibility sample and react to edges.
    fn sample(self: &Rc<Self>) {
        let visible = editor_visible(self.controller.config());

        let mut tracker = self.tracker.get();
        let edge = tracker.update(visible, &mut SessionWatcher(Rc::clone(self)));
        self.tracker.set(tracker);

        if !visible || edge.is_some() {
            return;
        }

        // The page may re-render the editor chrome and drop our toolbar while
        // the modal stays open.
        let detached = self
            .mounted
            .borrow()
            .as_ref()
            .is_some_and(|mounted| !mounted.toolbar.is_connected());
        if detached {
            debug!("toolbar detached by the page, remounting");
            self.unmount();
        }

        // Retry until the editor inside the modal exists.
        let unmounted = self.mounted.borrow().is_none();
        let retried = if unmounted { self.mount() } else { Ok(()) };
        if let Err(err) = retried {
            debug!("toolbar not mounted yet: {err}");
        }
    }
}

/// `EditorWatcher` handle over the shared session state.
struct SessionWatcher(Rc<Shared>);

impl EditorWatcher for SessionWatcher {
    fn on_editor_appeared(&mut self) {
        if let Err(err) = self.0.mount() {
            warn!("could not mount toolbar: {err}");
        }
    }

    fn on_editor_disappeared(&mut self) {
        self.0.unmount();
    }
}

/// Formatter attached to the current page.
pub struct FormatterSession {
    shared: Rc<Shared>,
    _observer: PresenceObserver,
}

impl FormatterSession {
    /// Start observing `document.body`; mounts immediately if the editor is
    /// already open.
    pub fn start(controller: FormatController) -> Result<Self, PlatformError> {
        let shared = Rc::new(Shared {
            controller,
            tracker: Cell::new(PresenceTracker::new()),
            mounted: RefCell::new(None),
        });

        let body = gloo_utils::body();
        let weak: Weak<Shared> = Rc::downgrade(&shared);
        let observer = PresenceObserver::observe(&body, move || {
            if let Some(shared) = weak.upgrade() {
                shared.sample();
            }
        })?;

        shared.sample();
        Ok(Self {
            shared,
            _observer: observer,
        })
    }

    pub fn controller(&self) -> &FormatController {
        &self.shared.controller
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.mounted.borrow().is_some()
    }

    /// Recompute button state from the current selection.
    pub fn refresh(&self) {
        self.shared.refresh();
    }

    /// Run a formatting action as if its button or shortcut had been used.
    pub fn run(&self, action: &FormatAction) {
        self.shared.run(action);
    }
}

impl Drop for FormatterSession {
    fn drop(&mut self) {
        self.shared.unmount();
    }
}
