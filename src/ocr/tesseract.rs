use crate::error::{Result, WorksightError};
use crate::ocr::engine::{OcrEngine, RecognizedText};
use async_trait::async_trait;
use log::debug;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// [`OcrEngine`] backed by the `tesseract` command-line binary.
///
/// Recognition runs out-of-process; the engine writes the recognized text to
/// stdout (`tesseract <image> stdout -l <lang>`). The binary must be on the
/// PATH unless an explicit program path is configured.
pub struct TesseractEngine {
    program: PathBuf,
}

impl TesseractEngine {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("tesseract"),
        }
    }

    /// Points the engine at a specific tesseract binary.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    async fn recognize(&self, path: &Path, language: &str) -> Result<RecognizedText> {
        debug!(
            "Invoking {} on {} (language {})",
            self.program.display(),
            path.display(),
            language
        );

        let output = Command::new(&self.program)
            .arg(path)
            .arg("stdout")
            .args(["-l", language])
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WorksightError::Ocr(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(RecognizedText {
            text: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
