use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy for the classification pipeline.
///
/// Every variant is surfaced to the caller unmodified: the pipeline performs
/// no retries and substitutes no defaults. `CorruptInput` and
/// `BadProbabilityVector` indicate internal contract bugs rather than user
/// error.
#[derive(Debug, Error)]
pub enum Error {
    /// The source image could not be read or decoded.
    #[error("cannot load image {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The classifier model artifact is missing, corrupt, or the runtime
    /// failed. Fatal to the enclosing operation; never retried.
    #[error("classifier model unavailable ({}): {message}", path.display())]
    ModelUnavailable { path: PathBuf, message: String },

    /// A tensor violated the (1, 100, 100, 1) / [0, 1] classifier contract.
    #[error("tensor violates the classifier input contract: {reason}")]
    CorruptInput { reason: String },

    /// The model returned a probability vector of the wrong length.
    #[error("model returned {actual} probabilities, expected {expected}")]
    BadProbabilityVector { expected: usize, actual: usize },
}
