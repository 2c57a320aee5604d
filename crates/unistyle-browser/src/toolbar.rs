//! Toolbar element.
//!
//! One `<button>` per registered style, inserted directly before the editor
//! container. Button state is pushed in from a `ToolState`; the DOM is never
//! read back to decide what is active.

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use smol_str::SmolStr;
use web_sys::{Document, Element};

use unistyle_core::{FormatController, PlatformError, ToolState};

use crate::js_err;

const TOOLBAR_STYLE: &str = "display: flex; align-items: center; padding: 5px;";

pub struct ToolbarDom {
    root: Element,
    buttons: Vec<(SmolStr, Element)>,
    active_class: String,
    _listeners: Vec<EventListener>,
}

impl ToolbarDom {
    /// Create the toolbar (detached). `on_command` receives the style id of
    /// the clicked button.
    pub fn build(
        document: &Document,
        controller: &FormatController,
        on_command: Rc<dyn Fn(&str)>,
    ) -> Result<Self, PlatformError> {
        let config = controller.config();

        let root = document.create_element("div").map_err(js_err)?;
        root.set_id(&config.toolbar_id);
        root.set_class_name(&config.toolbar_class);
        root.set_attribute("style", TOOLBAR_STYLE).map_err(js_err)?;

        let mut buttons = Vec::new();
        let mut listeners = Vec::new();

        for descriptor in controller.buttons() {
            let button = document.create_element("button").map_err(js_err)?;
            button.set_text_content(Some(descriptor.icon.as_str()));
            button.set_class_name(&descriptor.class_name);
            button.set_attribute("type", "button").map_err(js_err)?;
            button.set_attribute("title", &descriptor.title).map_err(js_err)?;
            button.set_attribute("data-style", &descriptor.style_id).map_err(js_err)?;
            root.append_child(&button).map_err(js_err)?;

            // Keep focus (and with it the selection) in the editor.
            listeners.push(EventListener::new_with_options(
                &button,
                "mousedown",
                EventListenerOptions::enable_prevent_default(),
                |event| event.prevent_default(),
            ));

            let on_command = Rc::clone(&on_command);
            let style_id = descriptor.style_id.clone();
            listeners.push(EventListener::new(&button, "click", move |_| {
                on_command(style_id.as_str())
            }));

            buttons.push((descriptor.style_id, button));
        }

        Ok(Self {
            root,
            buttons,
            active_class: config.active_class.clone(),
            _listeners: listeners,
        })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Insert the toolbar as the previous sibling of `anchor`.
    pub fn insert_before(&self, anchor: &Element) -> Result<(), PlatformError> {
        let parent = anchor
            .parent_node()
            .ok_or_else(|| PlatformError::from("editor container has no parent"))?;
        let anchor: &web_sys::Node = anchor;
        parent
            .insert_before(&self.root, Some(anchor))
            .map_err(js_err)?;
        Ok(())
    }

    /// Still attached to the document (host pages re-render freely).
    pub fn is_connected(&self) -> bool {
        self.root.is_connected()
    }

    /// Toggle the active class on every button.
    ///
    /// Every button is visited even if one fails; the last DOM error is
    /// returned (an active class with whitespace is rejected by the browser).
    pub fn sync(&self, state: &ToolState) -> Result<(), PlatformError> {
        let mut result = Ok(());
        for (style_id, button) in &self.buttons {
            if let Err(err) = button
                .class_list()
                .toggle_with_force(&self.active_class, state.is_active(style_id))
            {
                result = Err(js_err(err));
            }
        }
        result
    }

    /// Detach from the document. Listeners go with `self`.
    pub fn remove(self) {
        self.root.remove();
    }
}
