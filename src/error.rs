//! Error types for the cash dispenser.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Reasons a dispensation request can be refused.
///
/// All variants are recoverable: the session driver reports the message and
/// prompts again. The `Display` text is the user-facing line.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispenseError {
    /// Requested amount is not a positive integer.
    #[error("amount must be a positive number")]
    InvalidRequest,

    /// Total inventory value is strictly less than the requested amount.
    #[error("not enough funds in the machine")]
    InsufficientFunds,

    /// Total value suffices, but the greedy descent cannot hit the amount
    /// exactly with the available counts.
    #[error("unable to assemble the requested amount")]
    CannotMakeChange,
}

/// Errors raised by the inventory store. Fatal for the session.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read or write the store file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store file exists but cannot be understood. It is left in place
    /// rather than regenerated over.
    #[error("corrupt inventory store{}: {detail}", path_suffix(.path))]
    Corrupt {
        path: Option<PathBuf>,
        detail: String,
    },
}

impl StoreError {
    /// A corruption error not yet attributed to a path.
    pub fn corrupt(detail: impl Into<String>) -> Self {
        StoreError::Corrupt {
            path: None,
            detail: detail.into(),
        }
    }

    /// Attaches the store path to a corruption error, for the diagnostic.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            StoreError::Corrupt { detail, .. } => StoreError::Corrupt {
                path: Some(path.into()),
                detail,
            },
            other => other,
        }
    }
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" at {}", p.display()),
        None => String::new(),
    }
}
