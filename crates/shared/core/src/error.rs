use thiserror::Error;

/// Errors raised by feature, label, alignment and preprocessing operations.
///
/// Numeric edge cases (division by zero, logarithm of a non-positive ratio)
/// are not errors; they surface as IEEE NaN/Inf in the output values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Series too short for a window, or a frame with the wrong shape
    #[error("Shape error: {0}")]
    Shape(String),

    /// Referenced column is absent
    #[error("Column not found: {0}")]
    Column(String),

    /// Feature and label rows cannot be synchronized
    #[error("Alignment error: {0}")]
    Alignment(String),

    /// Unknown method token or invalid method/axis/labels combination
    #[error("Method error: {0}")]
    Method(String),

    /// Unordered or duplicate dates, or duplicate column names
    #[error("Invalid series: {0}")]
    InvalidSeries(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn shape(msg: impl Into<String>) -> Self {
        Error::Shape(msg.into())
    }

    pub fn alignment(msg: impl Into<String>) -> Self {
        Error::Alignment(msg.into())
    }

    pub fn method(msg: impl Into<String>) -> Self {
        Error::Method(msg.into())
    }
}
