//! Template change watching for tablier.
//!
//! A [`FileWatcher`] turns filesystem notifications for one directory into
//! batches of events, and [`run_watch_loop`] filters each batch down to
//! template files and triggers at most one regeneration per batch.

pub mod watch_loop;
pub mod watcher;

pub use watch_loop::{relevant_changes, run_watch_loop};
pub use watcher::{ChangeBatch, FileWatcher, FsEvent, FsEventKind, WatchError};
