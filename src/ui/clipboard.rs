//! Clipboard abstraction behind the copy action.
//!
//! The [`Clipboard`] trait allows tests to inject a mock; production code
//! uses [`SystemClipboard`], backed by `arboard`. The handle is created on
//! first use and then kept alive for the whole session: on X11 the
//! clipboard contents are owned by the live handle, so dropping it after
//! each write would lose the copied text.

use anyhow::{Context, Result};

/// Write access to a clipboard.
pub trait Clipboard: Send {
    fn write(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard, lazily initialized.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { inner: None }
    }

    fn ensure(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            self.inner =
                Some(arboard::Clipboard::new().context("Failed to open system clipboard")?);
        }
        self.inner
            .as_mut()
            .context("clipboard was just initialized")
    }
}

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        self.ensure()?
            .set_text(text)
            .context("Failed to write to system clipboard")
    }
}
