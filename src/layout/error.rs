//! Error types for the layout engines

use std::fmt;

use thiserror::Error;

/// Physical dimension of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Width => write!(f, "width"),
            Dimension::Height => write!(f, "height"),
        }
    }
}

/// Errors that can occur during layout computation
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// A group dimension may only grow until the layout pass is over
    #[error("invalid operation: new {dimension} {requested} is not greater than current {dimension} {current}")]
    InvalidOperation {
        dimension: Dimension,
        current: f64,
        requested: f64,
    },
}

impl LayoutError {
    /// Create the error raised when a group is asked to shrink
    pub fn shrink(dimension: Dimension, current: f64, requested: f64) -> Self {
        Self::InvalidOperation {
            dimension,
            current,
            requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shrink_display() {
        let err = LayoutError::shrink(Dimension::Width, 200.0, 150.0);
        let message = err.to_string();
        assert!(message.contains("invalid operation"));
        assert!(message.contains("width 150"));
        assert!(message.contains("current width 200"));
    }
}
