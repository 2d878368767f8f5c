pub mod actions;
pub mod catalog;
pub mod config;
pub mod error;
pub mod grid;
pub mod nav;

pub use actions::{ActionDispatcher, BrowserViewer, Clipboard, ReferenceViewer, SystemClipboard};
pub use catalog::{Catalog, DirectorySpec, EntryMeta, LineupEntry, ScanOptions, SourceCount};
pub use config::LineupConfig;
pub use error::{LineupError, Result};
pub use grid::{position, Shortcut, ShortcutGrid, DEFAULT_GRID_WIDTH};
pub use nav::{scroll_offset, DEFAULT_ENTRY_HEIGHT};
