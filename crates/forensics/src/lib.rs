//! Image forensics for receipt validation.
//!
//! This crate is the metadata stage of the validation pipeline. Given the
//! path of a stored receipt image it produces a structured
//! [`ImageMetadata`] record: file statistics, decoded image properties,
//! decoded tag descriptions, a screen-capture classification, and an ordered
//! list of forensic warnings.
//!
//! The extraction contract is degrade-not-abort: [`extract`] never returns
//! an error. Internal failures (unreadable file, broken image, malformed
//! tags) are logged and collapsed into a single warning so the rest of the
//! pipeline can still run and the request still succeeds.
//!
//! ```no_run
//! use forensics::{extract, ForensicsConfig};
//! use std::path::Path;
//!
//! let metadata = extract(Path::new("uploads/receipt.jpg"), &ForensicsConfig::default());
//! if !metadata.is_screenshot {
//!     println!("warnings: {:?}", metadata.warnings);
//! }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod screenshot;
pub mod tags;
pub mod types;

pub use config::ForensicsConfig;
pub use error::ForensicsError;
pub use extract::{
    extract, EDITING_SOFTWARE, WARN_FILE_TOO_SMALL, WARN_LOW_COLOR_VARIATION,
    WARN_LOW_RESOLUTION, WARN_METADATA_ERROR, WARN_NOT_SCREENSHOT, WARN_TIMESTAMP_SKEW,
};
pub use screenshot::classify;
pub use types::{FileStats, ImageInfo, ImageMetadata};
