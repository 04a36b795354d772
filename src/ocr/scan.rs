use crate::error::Result;
use crate::ocr::engine::OcrEngine;
use log::{debug, info};
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_LANGUAGE: &str = "eng";

const AMOUNT_PATTERN: &str = r"\$?\d+[,.]?\d*\.?\d{2}";
const DATE_PATTERN: &str = r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b";

/// Best-effort field guesses pulled out of recognized receipt text.
///
/// These pre-fill an expense form; the user is expected to review and
/// correct them. Nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    #[schemars(description = "First short free-text line that looks like neither an amount nor a date")]
    pub possible_vendor: Option<String>,

    #[schemars(description = "First amount-like token, with '$' and ',' stripped. Not currency-normalized")]
    pub possible_amount: Option<String>,

    #[schemars(description = "First date-like token, verbatim. Day/month order is not disambiguated")]
    pub possible_date: Option<String>,
}

/// Outcome of scanning one receipt image: the full recognized text plus the
/// heuristic field guesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseScan {
    pub raw_text: String,
    pub extracted_data: ExtractedFields,
}

impl ExpenseScan {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ExpenseScan)
    }

    pub fn schema_as_json() -> Result<String> {
        let schema = Self::generate_json_schema();
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}

/// Runs an [`OcrEngine`] over a receipt image and parses the recognized text
/// line by line.
///
/// Each of the three fields is an independent first-match search: once a
/// field is found, later lines cannot replace it. A line that matched the
/// amount or date pattern is never considered as a vendor name.
pub struct ReceiptScanner<E> {
    engine: E,
    language: String,
    amount: Regex,
    date: Regex,
}

impl<E: OcrEngine> ReceiptScanner<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            language: DEFAULT_LANGUAGE.to_string(),
            amount: Regex::new(AMOUNT_PATTERN).unwrap(),
            date: Regex::new(DATE_PATTERN).unwrap(),
        }
    }

    /// Selects a different OCR language model (e.g. `"deu"`).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Recognizes the image and extracts the field guesses. Engine failures
    /// (unreadable image, unsupported format) propagate unchanged; an image
    /// where nothing matches is not an error.
    pub async fn scan(&self, image: &Path) -> Result<ExpenseScan> {
        info!("Scanning receipt image {}", image.display());

        let recognized = self.engine.recognize(image, &self.language).await?;
        let extracted_data = self.extract_fields(&recognized.text);

        debug!(
            "Receipt scan extracted vendor={:?} amount={:?} date={:?}",
            extracted_data.possible_vendor,
            extracted_data.possible_amount,
            extracted_data.possible_date
        );

        Ok(ExpenseScan {
            raw_text: recognized.text,
            extracted_data,
        })
    }

    /// Pure single-pass parse of an already-recognized text block.
    pub fn extract_fields(&self, text: &str) -> ExtractedFields {
        let mut fields = ExtractedFields::default();

        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            if fields.possible_amount.is_none() {
                if let Some(matched) = self.amount.find(line) {
                    fields.possible_amount = Some(matched.as_str().replace(['$', ','], ""));
                }
            }

            if fields.possible_date.is_none() {
                if let Some(matched) = self.date.find(line) {
                    fields.possible_date = Some(matched.as_str().to_string());
                }
            }

            if fields.possible_vendor.is_none()
                && line.len() > 3
                && line.len() < 50
                && !self.amount.is_match(line)
                && !self.date.is_match(line)
            {
                fields.possible_vendor = Some(line.trim().to_string());
            }
        }

        fields
    }
}
