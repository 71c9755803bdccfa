//! Optical character recognition seam.
//!
//! The pipeline consumes OCR as a black box: a path in, recognized text
//! out. The default engine shells out to the `tesseract` CLI with a fixed
//! recognition language. OCR failure is fatal for the request — there is no
//! retry and no degraded text.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

/// Errors from the OCR engine.
#[derive(Debug, Error)]
pub enum OcrError {
    /// The engine binary could not be spawned.
    #[error("failed to run ocr command: {0}")]
    Io(#[from] std::io::Error),

    /// The engine ran but reported failure.
    #[error("ocr engine failed: {0}")]
    Engine(String),
}

/// Text recognition over a stored image.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Recognizes the text in the image at `path`.
    async fn recognize(&self, path: &Path) -> Result<String, OcrError>;
}

/// Default engine: one `tesseract <image> stdout -l <lang>` invocation per
/// request.
pub struct TesseractCli {
    command: String,
    language: String,
}

impl TesseractCli {
    pub fn new(command: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            language: language.into(),
        }
    }
}

#[async_trait]
impl OcrEngine for TesseractCli {
    async fn recognize(&self, path: &Path) -> Result<String, OcrError> {
        tracing::debug!(image = %path.display(), lang = %self.language, "running ocr");

        let output = Command::new(&self.command)
            .arg(path)
            .arg("stdout")
            .args(["-l", &self.language])
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Engine(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_binary_is_an_io_error() {
        let engine = TesseractCli::new("definitely-not-a-real-ocr-binary", "por");
        let result = engine.recognize(Path::new("/tmp/none.png")).await;
        assert!(matches!(result, Err(OcrError::Io(_))));
    }

    #[tokio::test]
    async fn failing_command_reports_engine_error() {
        // `false` exists on any unix host and always exits non-zero.
        let engine = TesseractCli::new("false", "por");
        let result = engine.recognize(Path::new("/tmp/none.png")).await;
        assert!(matches!(result, Err(OcrError::Engine(_))));
    }
}
