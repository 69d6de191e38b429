//! Materializing a generated project archive on disk

mod archive;
mod error;

pub use archive::{check_target_available, extract_archive, ExtractSummary};
pub use error::{ExistingKind, ExtractError};
