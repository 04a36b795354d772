use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The multi-line text block an engine recognized in one image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedText {
    pub text: String,
}

/// Boundary to the external OCR engine.
///
/// Recognition is long-running (multi-second for a typical receipt photo)
/// and is the only suspension point of the receipt-scanning component. The
/// engine is a black box beyond language selection; failures surface as
/// [`crate::WorksightError::Ocr`] with no retry.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Runs OCR over the image at `path` with the given language model
    /// (e.g. `"eng"`).
    async fn recognize(&self, path: &Path, language: &str) -> Result<RecognizedText>;
}
