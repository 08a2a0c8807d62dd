use thiserror::Error;

/// Result type for menu operations
pub type Result<T> = std::result::Result<T, MenuError>;

/// Errors raised while admitting dishes into the menu
///
/// Every variant is a validation failure local to one `add` call (or one
/// selector parse); none of them leaves the store mutated, and all are
/// recoverable by correcting the form input.
#[derive(Error, Debug)]
pub enum MenuError {
    /// A required form field was left empty
    #[error("Required field '{0}' is empty")]
    EmptyField(&'static str),

    /// Price text that is not a plain non-negative decimal in range
    #[error("Price '{0}' is not a valid non-negative amount")]
    InvalidPrice(String),

    /// Category or filter selector outside the closed set
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
}
