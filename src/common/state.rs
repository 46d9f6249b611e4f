// Application state shared across handlers

use mongodb::Database;
use std::path::PathBuf;
use std::sync::Arc;

use crate::services::storage::StorageService;

/// Process-wide context built once at startup and passed to every handler.
/// Holds the database handle, the blob store client and the configuration
/// knobs the handlers need. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub storage: Arc<StorageService>,
    pub staging_dir: PathBuf,
    /// When set, uploaded resumes keep their original file name (minus the
    /// extension) as the blob key, so re-uploading the same name overwrites
    /// rather than duplicates. When unset the store assigns a random name.
    pub preserve_original_filename: bool,
}
