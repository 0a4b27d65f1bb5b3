//! Error types and context management for fabric preview and analysis operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all catalog, configuration and export operations
#[derive(Debug)]
pub enum FabricError {
    /// A weave or yarn id was not found in the catalog
    UnresolvedReference {
        /// Kind of reference ("weave" or "yarn")
        kind: &'static str,
        /// The id that failed to resolve
        id: String,
    },

    /// Configuration value rejected by the core
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Yarn composition percentages do not sum to 100
    InvalidComposition {
        /// Id of the yarn being constructed
        yarn_id: String,
        /// Actual sum of the composition percentages
        total: u32,
    },

    /// Yarn definition is malformed for a reason other than composition
    InvalidYarn {
        /// Id of the yarn being constructed
        yarn_id: String,
        /// Description of what's wrong with the yarn
        reason: String,
    },

    /// Weave definition is malformed
    ///
    /// Occurs when:
    /// - The interlacement matrix shape disagrees with the declared repeat
    /// - The weight modifier is not a positive number
    /// - Two catalog entries share an id
    InvalidWeave {
        /// Id of the offending weave
        weave_id: String,
        /// Description of what's wrong with the weave
        reason: String,
    },

    /// A production rule family failed to evaluate
    RuleEvaluation {
        /// Name of the rule family
        family: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to save a rendered preview to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

    /// Failed to read or write a JSON document
    Serialization {
        /// Path of the document, if any
        path: PathBuf,
        /// Underlying serde error
        source: serde_json::Error,
    },
}

impl fmt::Display for FabricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedReference { kind, id } => {
                write!(f, "Unknown {kind} '{id}'")
            }
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid configuration '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidComposition { yarn_id, total } => {
                write!(
                    f,
                    "Composition of yarn '{yarn_id}' sums to {total}%, expected 100%"
                )
            }
            Self::InvalidYarn { yarn_id, reason } => {
                write!(f, "Invalid yarn '{yarn_id}': {reason}")
            }
            Self::InvalidWeave { weave_id, reason } => {
                write!(f, "Invalid weave '{weave_id}': {reason}")
            }
            Self::RuleEvaluation { family, reason } => {
                write!(f, "Rule family '{family}' failed: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
            Self::Serialization { path, source } => {
                write!(f, "Invalid JSON in '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for FabricError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fabric results
pub type Result<T> = std::result::Result<T, FabricError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File the failing operation was reading or writing
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with the file and operation involved
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the path context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path context applied
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<FabricError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only file-backed errors carry a path worth replacing
            match &mut error {
                FabricError::FileSystem {
                    path, operation, ..
                } => {
                    if let Some(p) = context.path {
                        *path = p;
                    }
                    if let Some(op) = context.operation {
                        *operation = op;
                    }
                }
                FabricError::Serialization { path, .. } | FabricError::ImageExport { path, .. } => {
                    if let Some(p) = context.path {
                        *path = p;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.into()),
            ..Default::default()
        })
    }
}

impl From<image::ImageError> for FabricError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for FabricError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for FabricError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FabricError {
    FabricError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an unresolved reference error
pub fn unresolved(kind: &'static str, id: &impl ToString) -> FabricError {
    FabricError::UnresolvedReference {
        kind,
        id: id.to_string(),
    }
}

/// Create a rule evaluation error
pub fn rule_error(family: &'static str, reason: &impl ToString) -> FabricError {
    FabricError::RuleEvaluation {
        family,
        reason: reason.to_string(),
    }
}
