#![allow(dead_code)]

use thiserror::Error;

use crate::export::ExportError;

/// Application-level error type.
///
/// Per-field validation problems are deliberately NOT here: they are
/// cosmetic states carried on the controller, and never abort collection
/// or rendering. Nothing in this enum is fatal to the session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Malformed form snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
