//! Outermost error handling for the CLI.
//!
//! Every failure ends the process with a non-zero status. Manager errors are
//! logged with their kind so configuration problems and failed checks read
//! differently from anything else.

use std::process::ExitCode;

use bialert_core::{ErrorKind, InvalidConfigError, ManagerError, TestFailureError};

/// A manager error found somewhere in an error chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<'a> {
    pub kind: ErrorKind,
    pub message: &'a str,
}

/// ## Summary
/// Finds the first manager error in `err`'s chain, whether it was lifted into
/// [`ManagerError`] or propagated as a bare specialization.
#[must_use]
pub fn classify(err: &anyhow::Error) -> Option<Classified<'_>> {
    err.chain().find_map(|cause| {
        if let Some(manager) = cause.downcast_ref::<ManagerError>() {
            return Some(Classified {
                kind: manager.kind(),
                message: manager.message(),
            });
        }
        if let Some(config) = cause.downcast_ref::<InvalidConfigError>() {
            return Some(Classified {
                kind: ErrorKind::InvalidConfig,
                message: config.message(),
            });
        }
        cause
            .downcast_ref::<TestFailureError>()
            .map(|check| Classified {
                kind: ErrorKind::TestFailure,
                message: check.message(),
            })
    })
}

/// ## Summary
/// Renders the line printed to stderr for `err`, prefixed by its kind.
#[must_use]
pub fn summary(err: &anyhow::Error) -> String {
    match classify(err) {
        Some(Classified {
            kind: ErrorKind::InvalidConfig,
            message,
        }) => format!("invalid configuration: {message}"),
        Some(Classified {
            kind: ErrorKind::TestFailure,
            message,
        }) => format!("check failed: {message}"),
        Some(Classified { message, .. }) => format!("error: {message}"),
        None => format!("error: {err:#}"),
    }
}

/// ## Summary
/// Logs `err` according to its kind, prints its [`summary`] to stderr and
/// returns the process exit code.
///
/// The summary is printed regardless of the log filter, so a failure is never
/// silent even with `logging.level = "off"`. None of the kinds is retryable,
/// so the code is always a failure.
#[must_use]
pub fn report(err: &anyhow::Error) -> ExitCode {
    let detail = format!("{err:#}");

    match classify(err) {
        Some(Classified {
            kind: kind @ ErrorKind::InvalidConfig,
            message,
        }) => {
            tracing::error!(%kind, reason = message, %detail, "Invalid configuration");
        }
        Some(Classified {
            kind: kind @ ErrorKind::TestFailure,
            message,
        }) => {
            tracing::error!(%kind, reason = message, %detail, "Check failed");
        }
        Some(Classified { kind, message }) => {
            tracing::error!(%kind, reason = message, %detail, "Manager error");
        }
        None => {
            tracing::error!(%detail, "Unexpected failure");
        }
    }

    eprintln!("{}", summary(err));

    ExitCode::FAILURE
}
