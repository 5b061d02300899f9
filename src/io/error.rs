//! Error types for level analysis and animation output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generator operations
#[derive(Debug)]
pub enum GeneratorError {
    /// Failed to read a level file from the filesystem
    LevelLoad {
        /// Path to the level file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Level text is not a rectangle of binary symbols
    LevelParse {
        /// Description of what's wrong with the level text
        reason: String,
    },

    /// Level rows are wider than a row fingerprint can hold
    InvalidWidth {
        /// Offending row width
        width: usize,
        /// Widest supported row
        max: usize,
    },

    /// No rows available for transition analysis
    ///
    /// Occurs when the level grid has zero rows, so no entry with positive
    /// transition weight can exist.
    EmptyLevel,

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to encode the output animation
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LevelLoad { path, source } => {
                write!(f, "Failed to read level '{}': {source}", path.display())
            }
            Self::LevelParse { reason } => {
                write!(f, "Invalid level text: {reason}")
            }
            Self::InvalidWidth { width, max } => {
                write!(
                    f,
                    "Level is {width} cells wide (widest supported row is {max})"
                )
            }
            Self::EmptyLevel => {
                write!(f, "Level has no rows to analyze")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export animation to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LevelLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GeneratorError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<image::ImageError> for GeneratorError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Convenience type alias for generator results
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GeneratorError {
    GeneratorError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
