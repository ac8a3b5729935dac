//! Typed errors for the encoding → distance → layout pipeline.
//!
//! File and JSON errors are not represented here; the document layer wraps
//! those in `anyhow` with the offending path attached.

/// Errors raised by dataset validation and the core pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Encoded vectors disagree in length.
    ///
    /// Every vector must have `2 × dimensions` components. The pipeline never
    /// pads or truncates to paper over a mismatch.
    #[error("encoded vector {index} has {got} components, expected {expected}")]
    DimensionalityMismatch {
        /// Index of the first offending vector.
        index: usize,
        /// Length of vector 0.
        expected: usize,
        /// Length of the offending vector.
        got: usize,
    },

    /// A dimension does not carry exactly four options.
    #[error("dimension '{id}' has {got} options, expected {expected}")]
    InvalidDimension {
        id: String,
        expected: usize,
        got: usize,
    },

    /// Two dimensions share an id.
    #[error("duplicate dimension id '{0}'")]
    DuplicateDimension(String),

    /// Two options within one dimension share a value token.
    #[error("dimension '{dimension}' lists option value '{value}' more than once")]
    DuplicateOption { dimension: String, value: String },

    /// The dimension list is empty, so there is nothing to encode.
    #[error("no dimensions defined")]
    NoDimensions,

    /// A profile was looked up by a name that is not in the dataset.
    #[error("no profile named '{0}'")]
    UnknownProfile(String),

    /// A layout was scored against a matrix of a different size.
    #[error("layout has {points} points but the distance matrix covers {profiles} profiles")]
    LayoutSizeMismatch { points: usize, profiles: usize },

    /// An optimizer parameter is out of its valid range.
    #[error("invalid {field} {value}: {reason}")]
    InvalidConfig {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}
