//! Guaranteed removal of per-request temporary files.
//!
//! The original upload and the preprocessed derivative are scoped to one
//! request and must disappear on every exit path — success, partial
//! failure, or total failure. The guard removes whatever it tracked when it
//! drops; removal errors are logged and never escalated.

use std::fs;
use std::path::PathBuf;

/// Drop guard over the temporary files of one request.
#[derive(Debug, Default)]
pub struct TempFiles {
    paths: Vec<PathBuf>,
}

impl TempFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a file for removal when the guard drops.
    pub fn track(&mut self, path: PathBuf) {
        self.paths.push(path);
    }
}

impl Drop for TempFiles {
    fn drop(&mut self) {
        for path in &self.paths {
            if !path.exists() {
                continue;
            }
            if let Err(err) = fs::remove_file(path) {
                tracing::warn!(path = %path.display(), error = %err, "failed to remove temporary file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracked_files_are_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let upload = dir.path().join("upload.jpg");
        let derivative = dir.path().join("upload_processed.png");
        fs::write(&upload, b"jpg").unwrap();
        fs::write(&derivative, b"png").unwrap();

        {
            let mut guard = TempFiles::new();
            guard.track(upload.clone());
            guard.track(derivative.clone());
        }

        assert!(!upload.exists());
        assert!(!derivative.exists());
    }

    #[test]
    fn missing_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut guard = TempFiles::new();
        guard.track(dir.path().join("never-created.jpg"));
        drop(guard);
    }

    #[test]
    fn removal_happens_even_when_tracking_stopped_early() {
        // Simulates a request that failed between upload and preprocessing.
        let dir = tempfile::tempdir().unwrap();
        let upload = dir.path().join("upload.jpg");
        fs::write(&upload, b"jpg").unwrap();

        let run = || -> Result<(), ()> {
            let mut guard = TempFiles::new();
            guard.track(upload.clone());
            Err(())
        };
        assert!(run().is_err());
        assert!(!upload.exists());
    }
}
