//! Registration errors
//!
//! Every variant is recoverable: the failing call changed nothing.

use thiserror::Error;

/// Overlay registration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UIError {
    /// A window with this identifier already exists
    #[error("duplicate window id '{0}'")]
    DuplicateWindow(String),

    /// An element with this identifier already exists
    #[error("duplicate element id '{0}'")]
    DuplicateElement(String),

    /// The group was already registered
    #[error("duplicate group '{0}'")]
    DuplicateGroup(String),

    /// No window with this identifier
    #[error("could not find window '{0}'")]
    MissingWindow(String),

    /// No element with this identifier
    #[error("could not find element '{0}'")]
    MissingElement(String),

    /// The group was never registered
    #[error("could not find group '{0}'")]
    MissingGroup(String),

    /// Checkbox orientation other than "left" or "right"
    #[error("unknown checkbox orientation '{0}', expected 'left' or 'right'")]
    InvalidOrientation(String),
}

impl UIError {
    /// Emit the diagnostic for a failed operation and hand the error back
    pub(crate) fn report(self, operation: &str) -> Self {
        log::warn!("{operation}: {self}");
        self
    }
}
