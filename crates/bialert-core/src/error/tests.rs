//! Tests for the manager error taxonomy.

use std::error::Error as _;

use super::*;

/// Stands in for a caller that handles "any manager error".
fn handle_any(result: ManagerResult<()>) -> Option<(ErrorKind, String)> {
    result
        .err()
        .map(|err| (err.kind(), err.message().to_owned()))
}

fn fail_config(message: &str) -> ManagerResult<()> {
    Err(InvalidConfigError::new(message).into())
}

fn fail_check(message: &str) -> ManagerResult<()> {
    Err(TestFailureError::new(message).into())
}

#[test_log::test]
fn test_invalid_config_is_a_manager_error() {
    for message in ["", "missing field: threshold", "päth/ünicode ✓"] {
        let err = ManagerError::from(InvalidConfigError::new(message));

        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert!(err.kind().is_a(ErrorKind::Manager));
        assert!(err.is_invalid_config());
        assert!(!err.is_test_failure());
        assert_eq!(err.message(), message);
        assert_eq!(err.to_string(), message);
    }
}

#[test_log::test]
fn test_test_failure_is_a_manager_error() {
    for message in ["", "latency check failed", "rule  with\ttabs"] {
        let err = ManagerError::from(TestFailureError::new(message));

        assert_eq!(err.kind(), ErrorKind::TestFailure);
        assert!(err.kind().is_a(ErrorKind::Manager));
        assert!(err.is_test_failure());
        assert!(!err.is_invalid_config());
        assert_eq!(err.message(), message);
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn test_root_handler_catches_both_specializations() {
    assert_eq!(
        handle_any(fail_config("bad value")),
        Some((ErrorKind::InvalidConfig, "bad value".to_owned()))
    );
    assert_eq!(
        handle_any(fail_check("check failed")),
        Some((ErrorKind::TestFailure, "check failed".to_owned()))
    );
    assert_eq!(
        handle_any(Err(ManagerError::new("generic"))),
        Some((ErrorKind::Manager, "generic".to_owned()))
    );
    assert_eq!(handle_any(Ok(())), None);
}

#[test_log::test]
fn test_scenario_invalid_config_caught_by_root_handler() {
    let err = fail_config("missing field: threshold").unwrap_err();
    tracing::debug!(kind = %err.kind(), "Caught by root handler");

    assert!(err.kind().is_a(ErrorKind::Manager));
    assert_eq!(err.message(), "missing field: threshold");
}

#[test_log::test]
fn test_scenario_test_failure_skips_config_handler() {
    let err = fail_check("latency check failed").unwrap_err();

    assert!(err.as_invalid_config().is_none());
    let err = match InvalidConfigError::try_from(err) {
        Ok(config_err) => panic!("config handler intercepted a test failure: {config_err}"),
        Err(err) => err,
    };

    let caught = TestFailureError::try_from(err).unwrap();
    assert_eq!(caught.message(), "latency check failed");
}

#[test]
fn test_specific_handlers_are_mutually_exclusive() {
    let config_err = ManagerError::from(InvalidConfigError::new("bad"));
    assert!(config_err.as_test_failure().is_none());
    assert_eq!(
        config_err.as_invalid_config(),
        Some(&InvalidConfigError::new("bad"))
    );

    let returned = TestFailureError::try_from(config_err).unwrap_err();
    assert!(returned.is_invalid_config());
    assert_eq!(returned.message(), "bad");

    let generic = ManagerError::new("boom");
    let generic = InvalidConfigError::try_from(generic).unwrap_err();
    let generic = TestFailureError::try_from(generic).unwrap_err();
    assert_eq!(generic.kind(), ErrorKind::Manager);
    assert_eq!(generic.message(), "boom");
}

#[test]
fn test_with_source_exposes_cause() {
    let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "bialert.toml");
    let err = ManagerError::with_source("failed to read configuration", cause);

    assert_eq!(err.kind(), ErrorKind::Manager);
    assert_eq!(err.to_string(), "failed to read configuration");
    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "bialert.toml");
    assert!(source.downcast_ref::<std::io::Error>().is_some());

    assert!(ManagerError::new("no cause").source().is_none());
    assert!(
        ManagerError::from(TestFailureError::new("x"))
            .source()
            .is_none()
    );
}

#[test]
fn test_kind_hierarchy() {
    use ErrorKind::{InvalidConfig, Manager, TestFailure};

    assert!(Manager.is_a(Manager));
    assert!(InvalidConfig.is_a(InvalidConfig));
    assert!(TestFailure.is_a(Manager));
    assert!(!Manager.is_a(InvalidConfig));
    assert!(!InvalidConfig.is_a(TestFailure));
    assert!(!TestFailure.is_a(InvalidConfig));

    assert_eq!(Manager.parent(), None);
    assert_eq!(InvalidConfig.parent(), Some(Manager));
}

#[test]
fn test_kind_display() {
    assert_eq!(ErrorKind::Manager.to_string(), "manager");
    assert_eq!(ErrorKind::InvalidConfig.to_string(), "invalid_config");
    assert_eq!(ErrorKind::TestFailure.as_str(), "test_failure");
}

#[test]
fn test_errors_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}

    assert_send_sync::<ManagerError>();
    assert_send_sync::<InvalidConfigError>();
    assert_send_sync::<TestFailureError>();
}
