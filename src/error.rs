//! Error types for the retrieval-analysis crate.
use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Error type for the crate.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum AnalysisError {
    /// Two arrays that must line up do not.
    #[error("Shape mismatch: expected {expected}, found {found}.")]
    ShapeMismatch {
        /// Description of the required shape.
        expected: String,
        /// Description of the shape that was supplied.
        found: String,
    },
    /// A quantity code that is not in the presentation registry.
    #[error("Unknown field code: {0:?}.")]
    UnknownField(String),
    /// A colormap name that is not recognized.
    #[error("Unknown colormap: {0:?}.")]
    UnknownColormap(String),
    /// A variance on the diagonal of a covariance matrix is zero, negative, or not finite.
    #[error("Degenerate variance at diagonal index {index}.")]
    DegenerateVariance {
        /// Position on the diagonal.
        index: usize,
    },
    /// Not enough data available for analysis.
    #[error("Not enough data available for analysis.")]
    NotEnoughData,
    /// Forward an error from the plotting backend.
    #[error("Error bubbled up from the drawing backend: {0}")]
    Drawing(String),
}

impl AnalysisError {
    pub(crate) fn shape_mismatch<E: ToString, F: ToString>(expected: E, found: F) -> Self {
        AnalysisError::ShapeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

/// Shorthand for results.
pub type Result<T> = std::result::Result<T, AnalysisError>;

impl<E> From<DrawingAreaErrorKind<E>> for AnalysisError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        AnalysisError::Drawing(err.to_string())
    }
}
