//! Error taxonomy for the `bialert` manager.
//!
//! [`ManagerError`] is the root kind. The two specializations,
//! [`InvalidConfigError`] and [`TestFailureError`], are standalone types that
//! lift into the root with `?`, so a caller handling `ManagerError` sees every
//! manager failure without enumerating them. Catching one specialization only
//! is done with `TryFrom`, which hands siblings back untouched.

use std::fmt;

use thiserror::Error;

/// Underlying cause carried by a root-kind [`ManagerError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Classification tag for a [`ManagerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Any failure originating from the manager.
    Manager,
    /// The supplied configuration failed validation.
    InvalidConfig,
    /// A requested self-test or check did not pass.
    TestFailure,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::InvalidConfig => "invalid_config",
            Self::TestFailure => "test_failure",
        }
    }

    /// ## Summary
    /// Returns the kind this one specializes, or `None` for the root.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Manager => None,
            Self::InvalidConfig | Self::TestFailure => Some(Self::Manager),
        }
    }

    /// ## Summary
    /// Returns `true` if `self` is `other` or a specialization of it.
    #[must_use]
    pub fn is_a(self, other: Self) -> bool {
        self == other || self.parent().is_some_and(|parent| parent.is_a(other))
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The supplied configuration failed validation.
///
/// Retrying will not make the configuration valid; the operation should stop
/// and surface the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidConfigError {
    message: String,
}

impl InvalidConfigError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Describes which validation rule failed.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A requested self-test or check did not pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TestFailureError {
    message: String,
}

impl TestFailureError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Describes the failing check.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Root error kind for every failure originating from the manager.
#[derive(Error, Debug)]
pub enum ManagerError {
    #[error("{message}")]
    Generic {
        message: String,
        source: Option<BoxError>,
    },

    #[error(transparent)]
    InvalidConfig(#[from] InvalidConfigError),

    #[error(transparent)]
    TestFailure(#[from] TestFailureError),
}

impl ManagerError {
    /// ## Summary
    /// Creates a root-kind error with no underlying cause.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
            source: None,
        }
    }

    /// ## Summary
    /// Creates a root-kind error wrapping `source`, which is then reachable
    /// through [`std::error::Error::source`].
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Generic {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Generic { .. } => ErrorKind::Manager,
            Self::InvalidConfig(_) => ErrorKind::InvalidConfig,
            Self::TestFailure(_) => ErrorKind::TestFailure,
        }
    }

    /// ## Summary
    /// Returns the message given at construction, whatever the kind.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Generic { message, .. } => message,
            Self::InvalidConfig(err) => err.message(),
            Self::TestFailure(err) => err.message(),
        }
    }

    #[must_use]
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }

    #[must_use]
    pub fn is_test_failure(&self) -> bool {
        matches!(self, Self::TestFailure(_))
    }

    #[must_use]
    pub fn as_invalid_config(&self) -> Option<&InvalidConfigError> {
        match self {
            Self::InvalidConfig(err) => Some(err),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_test_failure(&self) -> Option<&TestFailureError> {
        match self {
            Self::TestFailure(err) => Some(err),
            _ => None,
        }
    }
}

impl TryFrom<ManagerError> for InvalidConfigError {
    type Error = ManagerError;

    fn try_from(err: ManagerError) -> Result<Self, Self::Error> {
        match err {
            ManagerError::InvalidConfig(inner) => Ok(inner),
            other => Err(other),
        }
    }
}

impl TryFrom<ManagerError> for TestFailureError {
    type Error = ManagerError;

    fn try_from(err: ManagerError) -> Result<Self, Self::Error> {
        match err {
            ManagerError::TestFailure(inner) => Ok(inner),
            other => Err(other),
        }
    }
}

pub type ManagerResult<T> = std::result::Result<T, ManagerError>;

#[cfg(test)]
mod tests;
