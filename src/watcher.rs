//! Dataset file watching.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

/// Set up a file watcher that raises `needs_reload` when the dataset changes
pub fn setup_dataset_watcher(
    dataset_path: PathBuf,
    needs_reload: Arc<Mutex<bool>>,
) -> Option<RecommendedWatcher> {
    let config = Config::default().with_poll_interval(Duration::from_millis(500));

    // Canonicalize the path for reliable comparison
    let canonical_dataset = dataset_path
        .canonicalize()
        .unwrap_or_else(|_| dataset_path.clone());
    let dataset_filename = dataset_path.file_name().map(|s| s.to_os_string());

    let watcher_result = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                // Editors may report the file under a different path representation
                let matches = event.paths.iter().any(|p| {
                    if let Ok(canonical) = p.canonicalize() {
                        if canonical == canonical_dataset {
                            return true;
                        }
                    }
                    match (&dataset_filename, p.file_name()) {
                        (Some(expected), Some(name)) => name == expected,
                        _ => false,
                    }
                });

                if matches {
                    debug!(kind = ?event.kind, "dataset changed on disk");
                    if let Ok(mut flag) = needs_reload.lock() {
                        *flag = true;
                    }
                }
            }
        },
        config,
    );

    match watcher_result {
        Ok(mut watcher) => {
            // Watch the parent directory since some editors replace files
            let parent = match dataset_path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            if let Err(err) = watcher.watch(&parent, RecursiveMode::NonRecursive) {
                warn!(error = %err, path = %parent.display(), "cannot watch dataset directory");
            }
            Some(watcher)
        }
        Err(err) => {
            warn!(error = %err, "file watcher unavailable, live reload disabled");
            None
        }
    }
}
