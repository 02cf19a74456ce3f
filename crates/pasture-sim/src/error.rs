/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while setting up a simulation.
///
/// A running tick never fails; everything here happens before the first
/// tick and is fatal to startup.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A sprite or animation frame could not be loaded by the backend.
    #[error("unable to load image {path}: {reason}")]
    AssetLoad {
        /// Path of the image that failed.
        path: String,
        /// Backend-specific failure description.
        reason: String,
    },

    /// An animation frame set came back with no frames for a heading.
    #[error("frame set {pattern} has no frames")]
    EmptyFrameSet {
        /// The path pattern that produced the empty set.
        pattern: String,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration file could not be read.
    #[error("unable to read config {path}: {source}")]
    ConfigIo {
        /// The file that was being read.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration file is not valid JSON for [`crate::SimConfig`].
    #[error("malformed config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
