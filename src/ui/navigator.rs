//! # Navigator
//!
//! The three-view navigation state machine.
//!
//! ## States
//!
//! - [`Page::Main`] - the home view listing categories (initial state)
//! - [`Page::List`] - the scripts of one category
//! - [`Page::Detail`] - a single script
//!
//! ## Transitions
//!
//! - `select_category(key)` moves Main -> List. Any string is accepted: an
//!   unknown key simply renders an empty list rather than failing.
//! - `select_script(id)` moves List -> Detail.
//! - `back()` moves Detail -> List (category taken from the selected script)
//!   and List -> Main (category cleared). On Main it is a no-op.
//!
//! The navigator owns no catalog data. It holds a [`ScriptId`] that the
//! caller resolves against the catalog; a stale id degrades to an empty
//! detail view, never an error.

use crate::catalog::ScriptId;

/// Which of the three views is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Main,
    List,
    Detail,
}

/// Explicitly owned navigation state, mutated only through the transition
/// methods below.
#[derive(Debug, Clone)]
pub struct Navigator {
    page: Page,
    active_category: String,
    selected: Option<ScriptId>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            page: Page::Main,
            active_category: String::new(),
            selected: None,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// The category key shown on the list view. Empty on the home view.
    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    /// Handle of the script shown on the detail view, if any.
    pub fn selected(&self) -> Option<&ScriptId> {
        self.selected.as_ref()
    }

    /// Open a category's script list. The key is not validated; unknown
    /// keys yield an empty list view.
    pub fn select_category(&mut self, key: &str) {
        self.active_category.clear();
        self.active_category.push_str(key);
        self.page = Page::List;
    }

    /// Open one script's detail view.
    pub fn select_script(&mut self, id: ScriptId) {
        self.selected = Some(id);
        self.page = Page::Detail;
    }

    /// Ascend one level. Returning from the detail view lands on the list
    /// of the selected script's own category.
    pub fn back(&mut self) {
        match self.page {
            Page::Main => {}
            Page::List => {
                self.active_category.clear();
                self.page = Page::Main;
            }
            Page::Detail => {
                if let Some(id) = self.selected.take() {
                    self.active_category = id.category;
                }
                self.page = Page::List;
            }
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script_id(category: &str, index: usize) -> ScriptId {
        ScriptId {
            category: category.to_string(),
            index,
        }
    }

    #[test]
    fn test_initial_state() {
        let nav = Navigator::new();
        assert_eq!(nav.page(), Page::Main);
        assert_eq!(nav.active_category(), "");
        assert!(nav.selected().is_none());
    }

    #[test]
    fn test_select_category_and_back() {
        let mut nav = Navigator::new();
        nav.select_category("gtps");
        assert_eq!(nav.page(), Page::List);
        assert_eq!(nav.active_category(), "gtps");

        nav.back();
        assert_eq!(nav.page(), Page::Main);
        assert_eq!(nav.active_category(), "");
    }

    #[test]
    fn test_select_category_accepts_unknown_keys() {
        let mut nav = Navigator::new();
        nav.select_category("not-a-category");
        assert_eq!(nav.page(), Page::List);
        assert_eq!(nav.active_category(), "not-a-category");
    }

    #[test]
    fn test_select_script_and_back() {
        let mut nav = Navigator::new();
        nav.select_category("gtps");
        nav.select_script(script_id("gtps", 0));
        assert_eq!(nav.page(), Page::Detail);
        assert_eq!(nav.selected(), Some(&script_id("gtps", 0)));

        nav.back();
        assert_eq!(nav.page(), Page::List);
        assert_eq!(nav.active_category(), "gtps");
        assert!(nav.selected().is_none());
    }

    #[test]
    fn test_back_from_detail_uses_script_category() {
        // The selected script's own category wins, even if the active
        // category was changed in between.
        let mut nav = Navigator::new();
        nav.select_category("rgt");
        nav.select_script(script_id("rgt", 1));
        nav.select_category("gtps");
        nav.select_script(script_id("rgt", 1));

        nav.back();
        assert_eq!(nav.page(), Page::List);
        assert_eq!(nav.active_category(), "rgt");
    }

    #[test]
    fn test_back_on_main_is_noop() {
        let mut nav = Navigator::new();
        nav.back();
        assert_eq!(nav.page(), Page::Main);
        assert_eq!(nav.active_category(), "");
        assert!(nav.selected().is_none());
    }
}
