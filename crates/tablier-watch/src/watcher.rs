//! File watching for template regeneration.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// What happened to a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsEventKind {
    Created,
    Deleted,
    Modified,
}

/// A single change observed in the watched directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEvent {
    pub kind: FsEventKind,
    pub path: PathBuf,
}

impl FsEvent {
    pub fn new(kind: FsEventKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    /// File name of the changed entry.
    pub fn name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// Events that arrived together.
pub type ChangeBatch = Vec<FsEvent>;

/// Errors that can occur while setting up the watcher.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("Template directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("File watch error: {0}")]
    Watch(String),

    #[error("Regeneration failed: {0}")]
    Regenerate(String),
}

/// Watches a single directory, non-recursively.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher for `dir`.
    ///
    /// Events arriving within `settle` of each other are delivered as one
    /// batch. Returns the watcher and a channel to receive batches; the
    /// channel closes once the watcher is dropped.
    pub fn new(
        dir: &Path,
        settle: Duration,
    ) -> Result<(Self, async_mpsc::Receiver<ChangeBatch>), WatchError> {
        if !dir.is_dir() {
            return Err(WatchError::DirectoryNotFound(dir.display().to_string()));
        }

        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(|e| WatchError::Watch(e.to_string()))?;

        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .map_err(|e| WatchError::Watch(e.to_string()))?;

        std::thread::spawn(move || {
            while let Ok(first) = sync_rx.recv() {
                let mut batch = classify(&first);

                while let Ok(event) = sync_rx.recv_timeout(settle) {
                    batch.extend(classify(&event));
                }

                if batch.is_empty() {
                    continue;
                }
                if async_tx.blocking_send(batch).is_err() {
                    break;
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

fn classify(event: &notify::Event) -> Vec<FsEvent> {
    event
        .paths
        .iter()
        .filter_map(|path| classify_event(path, &event.kind))
        .collect()
}

/// Classify a notify event into an [`FsEvent`].
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<FsEvent> {
    use notify::EventKind;

    let kind = match kind {
        EventKind::Create(_) => FsEventKind::Created,
        EventKind::Remove(_) => FsEventKind::Deleted,
        EventKind::Modify(_) => FsEventKind::Modified,
        _ => return None,
    };

    Some(FsEvent::new(kind, path))
}
