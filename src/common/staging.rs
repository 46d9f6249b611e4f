// Temporary staging files for uploads

use std::path::{Path, PathBuf};

use crate::common::id_generator::generate_raw_id;

/// A file staged on local disk for the duration of one upload request.
///
/// The file is removed when the guard is dropped, so every exit path out of
/// a handler (success, early `?` return, panic unwind) releases the staged
/// copy.
#[derive(Debug)]
pub struct StagedUpload {
    path: PathBuf,
}

impl StagedUpload {
    /// Write the uploaded bytes to a fresh randomly-named file under `dir`
    pub async fn write(dir: &Path, data: &[u8]) -> std::io::Result<Self> {
        let path = dir.join(format!("{}.upload", generate_raw_id(16)));
        tokio::fs::write(&path, data).await?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagedUpload {
    fn drop(&mut self) {
        // The handler may run on any exit path; a missing file is fine
        let _ = std::fs::remove_file(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_staged_file_written_and_removed_on_drop() {
        let dir = std::env::temp_dir();
        let staged = StagedUpload::write(&dir, b"resume bytes").await.unwrap();
        let path = staged.path().to_path_buf();

        assert!(path.exists());
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"resume bytes");

        drop(staged);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_staged_file_removed_on_error_path() {
        async fn failing(dir: &Path, seen: &mut PathBuf) -> Result<(), String> {
            let staged = StagedUpload::write(dir, b"doomed")
                .await
                .map_err(|e| e.to_string())?;
            *seen = staged.path().to_path_buf();
            Err("upload failed".to_string())
        }

        let dir = std::env::temp_dir();
        let mut path = PathBuf::new();
        let result = failing(&dir, &mut path).await;

        assert!(result.is_err());
        assert!(!path.exists(), "staged file leaked on error path");
    }

    #[tokio::test]
    async fn test_staged_files_get_distinct_names() {
        let dir = std::env::temp_dir();
        let a = StagedUpload::write(&dir, b"a").await.unwrap();
        let b = StagedUpload::write(&dir, b"b").await.unwrap();
        assert_ne!(a.path(), b.path());
    }
}
