//! Session state: navigation, selection, toast and clipboard.
//!
//! [`App`] composes the [`Navigator`] with presentation-only state (which
//! row is highlighted on each view, the detail scroll offset, the toast on
//! screen). All mutation happens through its methods, so the whole session
//! can be driven from tests without a terminal.

use crate::catalog::{Catalog, Category, Script, ScriptId};
use crate::ui::clipboard::{Clipboard, SystemClipboard};
use crate::ui::navigator::{Navigator, Page};
use crate::ui::theme::Theme;
use crate::ui::toast::{Notification, Toast};
use std::sync::mpsc::{self, Receiver, Sender};

pub struct App {
    pub catalog: Catalog,
    pub navigator: Navigator,
    /// Highlighted category row on the home view.
    pub main_index: usize,
    /// Highlighted script row on the list view.
    pub list_index: usize,
    /// Scroll offset into the script source on the detail view.
    pub detail_scroll: u16,
    pub toast: Option<Toast>,
    pub show_help: bool,
    pub should_quit: bool,
    pub theme: Theme,
    clipboard: Box<dyn Clipboard>,
    notify_tx: Sender<Notification>,
    notify_rx: Receiver<Notification>,
}

impl App {
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        Self::with_clipboard(catalog, theme, Box::new(SystemClipboard::new()))
    }

    /// Create an app with an injected clipboard (used by tests).
    pub fn with_clipboard(catalog: Catalog, theme: Theme, clipboard: Box<dyn Clipboard>) -> Self {
        let (notify_tx, notify_rx) = mpsc::channel();
        Self {
            catalog,
            navigator: Navigator::new(),
            main_index: 0,
            list_index: 0,
            detail_scroll: 0,
            toast: None,
            show_help: false,
            should_quit: false,
            theme,
            clipboard,
            notify_tx,
            notify_rx,
        }
    }

    /// Advance per-frame state: deliver queued notifications (last writer
    /// wins on screen) and dismiss an expired toast.
    pub fn tick(&mut self) {
        while let Ok(notification) = self.notify_rx.try_recv() {
            self.toast = Some(Toast::new(notification));
        }
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Number of selectable rows on the current view.
    fn item_count(&self) -> usize {
        match self.navigator.page() {
            Page::Main => self.catalog.categories().len(),
            Page::List => self.active_scripts().len(),
            Page::Detail => 0,
        }
    }

    pub fn next(&mut self) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        match self.navigator.page() {
            Page::Main => self.main_index = (self.main_index + 1) % count,
            Page::List => self.list_index = (self.list_index + 1) % count,
            Page::Detail => {}
        }
    }

    pub fn previous(&mut self) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        let step = |index: usize| if index > 0 { index - 1 } else { count - 1 };
        match self.navigator.page() {
            Page::Main => self.main_index = step(self.main_index),
            Page::List => self.list_index = step(self.list_index),
            Page::Detail => {}
        }
    }

    /// Descend into the highlighted item: a category on the home view, a
    /// script on the list view. No-op on the detail view.
    pub fn open_selected(&mut self) {
        match self.navigator.page() {
            Page::Main => {
                if let Some(category) = self.catalog.categories().get(self.main_index) {
                    let key = category.info.key.clone();
                    self.navigator.select_category(&key);
                    self.list_index = 0;
                }
            }
            Page::List => {
                let category = self.navigator.active_category().to_string();
                if self.list_index < self.catalog.scripts_in(&category).len() {
                    self.navigator.select_script(ScriptId {
                        category,
                        index: self.list_index,
                    });
                    self.detail_scroll = 0;
                }
            }
            Page::Detail => {}
        }
    }

    /// Ascend one view. The list selection is kept when returning from the
    /// detail view so the same script stays highlighted.
    pub fn go_back(&mut self) {
        match self.navigator.page() {
            Page::Main => {}
            Page::List => {
                self.navigator.back();
                self.list_index = 0;
            }
            Page::Detail => {
                self.navigator.back();
                self.detail_scroll = 0;
            }
        }
    }

    /// Copy the selected script's source to the clipboard. Only meaningful
    /// on the detail view; anywhere else this is a no-op. Exactly one
    /// notification (success or failure) is queued per invocation and
    /// delivered on the next tick. Navigation state never changes.
    pub fn copy_selected(&mut self) {
        if self.navigator.page() != Page::Detail {
            return;
        }
        let content = match self
            .navigator
            .selected()
            .and_then(|id| self.catalog.script(id))
        {
            Some(script) => script.content.clone(),
            // A stale selection is absence, not an error.
            None => return,
        };

        let notification = match self.clipboard.write(&content) {
            Ok(()) => Notification::copy_success(),
            Err(_) => Notification::copy_failure(),
        };
        // The receiver lives on self, so this send cannot fail.
        let _ = self.notify_tx.send(notification);
    }

    pub fn scroll_detail_down(&mut self) {
        let max = self
            .selected_script()
            .map(|s| s.content.lines().count().saturating_sub(1))
            .unwrap_or(0);
        if (self.detail_scroll as usize) < max {
            self.detail_scroll += 1;
        }
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    /// The category highlighted on the home view.
    pub fn selected_category(&self) -> Option<&Category> {
        self.catalog.categories().get(self.main_index)
    }

    /// Scripts of the active category (empty for unknown keys).
    pub fn active_scripts(&self) -> &[Script] {
        self.catalog.scripts_in(self.navigator.active_category())
    }

    /// The script relevant to the current view: the highlighted row on the
    /// list view, or the opened script on the detail view.
    pub fn selected_script(&self) -> Option<&Script> {
        match self.navigator.page() {
            Page::Main => None,
            Page::List => self.active_scripts().get(self.list_index),
            Page::Detail => self
                .navigator
                .selected()
                .and_then(|id| self.catalog.script(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct NoopClipboard;

    impl Clipboard for NoopClipboard {
        fn write(&mut self, _text: &str) -> anyhow::Result<()> {
            Ok(())
        }
    }

    struct FailingClipboard;

    impl Clipboard for FailingClipboard {
        fn write(&mut self, _text: &str) -> anyhow::Result<()> {
            Err(anyhow!("no clipboard available"))
        }
    }

    fn test_app() -> App {
        App::with_clipboard(
            Catalog::builtin(),
            Theme::default_theme().clone(),
            Box::new(NoopClipboard),
        )
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = test_app();
        assert_eq!(app.main_index, 0);
        app.next();
        assert_eq!(app.main_index, 1);
        app.next();
        assert_eq!(app.main_index, 0);
        app.previous();
        assert_eq!(app.main_index, 1);
    }

    #[test]
    fn test_open_and_back() {
        let mut app = test_app();
        app.open_selected();
        assert_eq!(app.navigator.page(), Page::List);
        assert_eq!(app.navigator.active_category(), "gtps");

        app.next();
        app.open_selected();
        assert_eq!(app.navigator.page(), Page::Detail);
        assert_eq!(
            app.selected_script().map(|s| s.name.as_str()),
            Some("Teleport System")
        );

        app.go_back();
        assert_eq!(app.navigator.page(), Page::List);
        // Selection survives the round trip.
        assert_eq!(app.list_index, 1);
    }

    #[test]
    fn test_open_on_empty_list_is_noop() {
        let mut app = test_app();
        app.navigator.select_category("unknown");
        app.open_selected();
        assert_eq!(app.navigator.page(), Page::List);
        assert!(app.selected_script().is_none());
    }

    #[test]
    fn test_copy_outside_detail_produces_no_toast() {
        let mut app = test_app();
        app.copy_selected();
        app.tick();
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_copy_failure_becomes_error_toast() {
        let mut app = App::with_clipboard(
            Catalog::builtin(),
            Theme::default_theme().clone(),
            Box::new(FailingClipboard),
        );
        app.open_selected();
        app.open_selected();
        assert_eq!(app.navigator.page(), Page::Detail);

        app.copy_selected();
        app.tick();
        let toast = app.toast.as_ref().expect("toast shown");
        assert_eq!(toast.notification, Notification::copy_failure());
        // Failure never changes navigation state.
        assert_eq!(app.navigator.page(), Page::Detail);
    }

    #[test]
    fn test_detail_scroll_clamps() {
        let mut app = test_app();
        app.open_selected();
        app.open_selected();
        let lines = app
            .selected_script()
            .map(|s| s.content.lines().count())
            .expect("script selected");

        for _ in 0..lines * 2 {
            app.scroll_detail_down();
        }
        assert_eq!(app.detail_scroll as usize, lines - 1);

        app.scroll_detail_up();
        assert_eq!(app.detail_scroll as usize, lines - 2);
    }
}
