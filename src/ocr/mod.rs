pub mod engine;
pub mod scan;

#[cfg(feature = "tesseract")]
pub mod tesseract;

pub use engine::*;
pub use scan::*;

#[cfg(feature = "tesseract")]
pub use tesseract::*;
