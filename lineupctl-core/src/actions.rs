//! Entry actions: copy the share code, open the reference URL.
//!
//! Both actions are single fire-and-forget requests with no retry
//! semantics; retries are caller policy. The platform clipboard and the
//! URL display mechanism sit behind traits so the dispatcher stays
//! testable and the gallery can swap in an embedded viewer later.

use cli_clipboard::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use url::Url;

use crate::catalog::LineupEntry;
use crate::error::{LineupError, Result};

/// Write access to a clipboard.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Something that can display a reference URL (a browser, a webview).
pub trait ReferenceViewer {
    fn show(&mut self, url: &Url) -> Result<()>;
}

/// The operating system clipboard, via `cli-clipboard`. A context is
/// created per call; on some platforms a held context goes stale.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut ctx = ClipboardContext::new()
            .map_err(|err| LineupError::clipboard_unavailable(err.to_string()))?;
        ctx.set_contents(text.to_owned())
            .map_err(|err| LineupError::clipboard_unavailable(err.to_string()))
    }
}

/// Hands the URL to the OS default browser.
pub struct BrowserViewer;

impl ReferenceViewer for BrowserViewer {
    fn show(&mut self, url: &Url) -> Result<()> {
        open::that(url.as_str())?;
        Ok(())
    }
}

/// Per-entry actions, decoupled from how entries are rendered.
pub struct ActionDispatcher<C, V> {
    clipboard: C,
    viewer: V,
}

impl ActionDispatcher<SystemClipboard, BrowserViewer> {
    /// Dispatcher wired to the real platform: system clipboard, default
    /// browser.
    pub fn system() -> Self {
        Self::new(SystemClipboard, BrowserViewer)
    }
}

impl<C: Clipboard, V: ReferenceViewer> ActionDispatcher<C, V> {
    pub fn new(clipboard: C, viewer: V) -> Self {
        Self { clipboard, viewer }
    }

    /// Put the entry's share code on the clipboard. An empty code is
    /// still written, so the action is idempotent and safe to invoke on
    /// under-specified entries.
    pub fn copy_code(&mut self, entry: &LineupEntry) -> Result<()> {
        self.clipboard.set_text(&entry.share_code)?;
        debug!("copied share code for '{}'", entry.name);
        Ok(())
    }

    /// Ask the viewer to display the entry's reference URL. Empty or
    /// unparsable URLs are rejected before the viewer is involved.
    pub fn open_reference(&mut self, entry: &LineupEntry) -> Result<()> {
        if entry.reference_url.is_empty() {
            return Err(LineupError::invalid_url(
                &entry.reference_url,
                "no reference URL recorded",
            ));
        }
        let url = Url::parse(&entry.reference_url)
            .map_err(|err| LineupError::invalid_url(&entry.reference_url, err.to_string()))?;
        self.viewer.show(&url)?;
        debug!("opened reference for '{}'", entry.name);
        Ok(())
    }
}
