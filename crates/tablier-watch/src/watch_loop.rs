//! Filter-and-regenerate loop driven by watcher batches.

use std::collections::BTreeSet;
use std::fmt::Display;

use tokio::sync::mpsc::Receiver;

use crate::watcher::{ChangeBatch, FsEvent, WatchError};

/// Names of the entries in `batch` that end with `suffix`, deduplicated.
pub fn relevant_changes(batch: &[FsEvent], suffix: &str) -> BTreeSet<String> {
    batch
        .iter()
        .filter_map(FsEvent::name)
        .filter(|name| name.ends_with(suffix))
        .map(str::to_string)
        .collect()
}

/// Wait for batches and call `regenerate` once for every batch that touches
/// at least one file ending in `suffix`.
///
/// Batches are handled strictly one after another: the next batch is not
/// received until the previous regeneration has returned. Runs until the
/// channel closes, which only happens when the watcher is dropped, and
/// returns how many regenerations ran. An error from `regenerate` ends the
/// loop.
pub async fn run_watch_loop<F, E>(
    rx: &mut Receiver<ChangeBatch>,
    suffix: &str,
    mut regenerate: F,
) -> Result<usize, WatchError>
where
    F: FnMut(&BTreeSet<String>) -> Result<(), E>,
    E: Display,
{
    let mut passes = 0;

    while let Some(batch) = rx.recv().await {
        let changes = relevant_changes(&batch, suffix);
        if changes.is_empty() {
            tracing::debug!("Ignoring {} unrelated change(s)", batch.len());
            continue;
        }

        tracing::info!("Change detected: {:?}", changes);
        regenerate(&changes).map_err(|e| WatchError::Regenerate(e.to_string()))?;
        passes += 1;
    }

    Ok(passes)
}
