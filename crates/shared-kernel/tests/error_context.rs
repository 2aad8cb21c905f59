use std::io;

use mx_numplan_shared_kernel::{ApplicationError, DomainError, ErrorContext, NumplanError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(NumplanError::from)
        .context("reading dataset")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("reading dataset"));
    assert!(display.contains("Output error:"));
}

#[test]
fn domain_errors_convert_into_root() {
    let err: std::result::Result<(), DomainError> =
        Err(DomainError::invalid_range("start after end"));
    let wrapped = err.with_context(|| "merging mobile ranges".to_string()).unwrap_err();
    let display = wrapped.to_string();
    assert!(display.starts_with("merging mobile ranges: Domain error: Invalid range"));
}

#[test]
fn invariant_violation_is_flagged() {
    assert!(DomainError::invariant("diff", "overlap").is_invariant_violation());
    assert!(!DomainError::invalid_range("bad").is_invariant_violation());
}

#[test]
fn missing_route_list_exits_with_two_through_context() {
    let err: std::result::Result<(), NumplanError> =
        Err(ApplicationError::RouteListMissing { name: "MX-Mobile".to_string() }.into());
    let wrapped = err.context("syncing mobile").unwrap_err();
    assert!(wrapped.to_string().contains("Route list 'MX-Mobile' needs to be created"));
    assert!(matches!(
        wrapped.root(),
        NumplanError::Application(ApplicationError::RouteListMissing { .. })
    ));
    assert_eq!(wrapped.exit_status(), 2);
}

#[test]
fn other_errors_exit_with_one() {
    let err = NumplanError::from(ApplicationError::NoSnapshots { location: "data".to_string() });
    assert_eq!(err.exit_status(), 1);
}
