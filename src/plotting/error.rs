//! Error types for the plotting core.

use std::fmt;
use std::io;

/// Degenerate inputs that make a statistic or a plot frame undefined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// An operation that divides by the element count received no elements
    EmptySequence,
    /// Paired sequences must have the same length
    LengthMismatch { left: usize, right: usize },
    /// All independent values are identical, so the slope is undefined
    ZeroVariance,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::EmptySequence => write!(f, "empty observation sequence"),
            InvalidInput::LengthMismatch { left, right } => {
                write!(f, "paired sequences differ in length ({} vs {})", left, right)
            }
            InvalidInput::ZeroVariance => {
                write!(f, "independent values have zero variance")
            }
        }
    }
}

/// The main error type for plotting operations.
#[derive(Debug)]
pub enum PlotError {
    /// Error during IO operations (file writing, etc.)
    Io(io::Error),
    /// Input data that cannot be fitted or framed
    InvalidInput(InvalidInput),
    /// Invalid configuration or parameters
    InvalidConfig(String),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(err) => write!(f, "IO error: {}", err),
            PlotError::InvalidInput(kind) => write!(f, "Invalid input: {}", kind),
            PlotError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PlotError {
    fn from(err: io::Error) -> Self {
        PlotError::Io(err)
    }
}

impl From<InvalidInput> for PlotError {
    fn from(kind: InvalidInput) -> Self {
        PlotError::InvalidInput(kind)
    }
}

/// Result type alias for plotting operations.
pub type PlotResult<T> = Result<T, PlotError>;
