//! Top-level errors of the view pipeline

use thiserror::Error;

use crate::layout::{LayoutError, SettingsError};

/// Failure of [`crate::SmartViewEngine::generate_view`]
///
/// Layout failures are contract violations inside the engines; callers only
/// learn that the view could not be produced, with the cause as its source.
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("unable to render smart view")]
    LayoutFailed(#[source] LayoutError),
}

impl From<LayoutError> for ViewError {
    fn from(err: LayoutError) -> Self {
        ViewError::LayoutFailed(err)
    }
}

/// Errors of the command-line front end
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Settings(#[from] SettingsError),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse input TOML: {0}")]
    Input(#[from] toml::de::Error),
    #[error(transparent)]
    View(#[from] ViewError),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;
    use crate::layout::Dimension;

    #[test]
    fn test_view_error_keeps_layout_cause() {
        let err = ViewError::from(LayoutError::shrink(Dimension::Width, 10.0, 5.0));

        assert_eq!(err.to_string(), "unable to render smart view");
        let source = err.source().map(|s| s.to_string()).unwrap_or_default();
        assert!(source.contains("10"));
    }
}
