//! Browser implementation of the selection host.
//!
//! Uses the DOM Selection API. Only the first range is considered, and only
//! when it lies inside the configured editor element.

use unistyle_core::{PlatformError, SelectionHost};

use crate::js_err;

/// Selection access scoped to one editor element.
pub struct BrowserSelection {
    editor_selector: String,
}

impl BrowserSelection {
    /// Create a selection host for the editor matched by `editor_selector`.
    pub fn new(editor_selector: impl Into<String>) -> Self {
        Self {
            editor_selector: editor_selector.into(),
        }
    }

    pub fn editor_selector(&self) -> &str {
        &self.editor_selector
    }

    fn editor(&self) -> Result<web_sys::Element, PlatformError> {
        gloo_utils::document()
            .query_selector(&self.editor_selector)
            .map_err(js_err)?
            .ok_or_else(|| PlatformError::from("editor not found"))
    }

    /// The live selection and its first range, if that range is inside the editor.
    fn current_range(
        &self,
    ) -> Result<Option<(web_sys::Selection, web_sys::Range)>, PlatformError> {
        let Some(selection) = gloo_utils::window().get_selection().map_err(js_err)? else {
            return Ok(None);
        };
        if selection.range_count() == 0 {
            return Ok(None);
        }

        let range = selection.get_range_at(0).map_err(js_err)?;
        let ancestor = range.common_ancestor_container().map_err(js_err)?;
        if !self.editor()?.contains(Some(&ancestor)) {
            return Ok(None);
        }

        Ok(Some((selection, range)))
    }
}

impl SelectionHost for BrowserSelection {
    fn selected_text(&self) -> Result<Option<String>, PlatformError> {
        Ok(self
            .current_range()?
            .map(|(_, range)| String::from(range.to_string())))
    }

    fn replace_selection(&mut self, replacement: &str) -> Result<(), PlatformError> {
        let Some((selection, range)) = self.current_range()? else {
            return Err("selection is no longer inside the editor".into());
        };

        // The editor sees a single text node in a span, the same shape a paste produces.
        let span = gloo_utils::document()
            .create_element("span")
            .map_err(js_err)?;
        span.set_text_content(Some(replacement));

        range.delete_contents().map_err(js_err)?;
        range.insert_node(&span).map_err(js_err)?;
        range.select_node_contents(&span).map_err(js_err)?;

        selection.remove_all_ranges().map_err(js_err)?;
        selection.add_range(&range).map_err(js_err)?;

        tracing::debug!(selector = %self.editor_selector, "replaced selection");
        Ok(())
    }
}
