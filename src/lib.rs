//! # Worksight
//!
//! A library for rolling up project, task, and timesheet activity into
//! chart-ready analytics, with OCR-assisted receipt field extraction for
//! expense entry.
//!
//! ## Core Concepts
//!
//! - **Filter criteria**: a normalized set of optional restrictions
//!   (project, employee, status, billable, date range) derived from a
//!   loosely-typed query bag. Anything unrecognized means "no restriction".
//! - **Aggregate views**: seven read-only roll-ups (KPIs, project costs,
//!   resource utilization, completion, workload trend, revenue/expense
//!   trend, task status distribution), each recomputed from a fresh storage
//!   snapshot per call.
//! - **Receipt scanning**: a single greedy pass over OCR-recognized text
//!   that guesses vendor, amount, and date for form pre-fill. Best-effort
//!   by design; absent guesses are not errors.
//!
//! ## Example
//!
//! ```rust,ignore
//! use worksight::{AnalyticsEngine, MemStorage, RawFilters};
//!
//! let storage = MemStorage {
//!     projects: load_projects(),
//!     tasks: load_tasks(),
//!     timesheets: load_timesheets(),
//!     users: load_users(),
//! };
//! let engine = AnalyticsEngine::new(storage);
//!
//! let criteria = RawFilters {
//!     project: Some("all".to_string()),
//!     billable: Some("true".to_string()),
//!     ..RawFilters::default()
//! }
//! .normalize();
//!
//! let kpis = engine.kpis(&criteria).await?;
//! let trend = engine.workload_trend(&criteria).await?;
//! ```

pub mod analytics;
pub mod error;
pub mod filter;
pub mod model;
pub mod ocr;
pub mod storage;
pub mod views;

pub use analytics::{AnalyticsEngine, MONTH_ABBREVS};
pub use error::{Result, WorksightError};
pub use filter::{FilterCriteria, RawFilters};
pub use model::*;
pub use ocr::{ExpenseScan, ExtractedFields, OcrEngine, ReceiptScanner, RecognizedText};
pub use storage::{MemStorage, Storage};
pub use views::*;

#[cfg(feature = "tesseract")]
pub use ocr::TesseractEngine;
