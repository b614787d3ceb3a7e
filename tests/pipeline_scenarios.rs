//! End-to-end scenarios composing constructors, accessors, and combinators
//! the way calling code would in a real lookup/transform pipeline.

use erropt::{BoxedError, Optional, OptionalError};
use pretty_assertions::assert_eq;

#[test]
fn failed_lookup_reports_its_reason() {
    let record = Optional::<String>::from_parts(None, Some("db timeout".into()));

    assert!(record.is_absent());
    assert_eq!(record.error().unwrap().to_string(), "db timeout");
    assert_eq!(record.get(), None);
}

#[test]
#[should_panic(expected = "carrying a failure: db timeout")]
fn failed_lookup_aborts_unsafe_retrieval() {
    let record = Optional::<String>::from_parts(None, Some("db timeout".into()));
    let _ = record.must_get();
}

#[test]
fn fallible_binary_op_combines_present_operands() {
    let sum = Optional::of(3).try_zip_with(Optional::of(4), |a, b| Ok(a + b));

    assert_eq!(sum.get(), Some(&7));
    assert!(sum.error().is_none());
}

#[test]
fn config_pipeline_parses_a_port() {
    let port = Optional::from_option(Some("8080"))
        .try_map(|raw| raw.parse::<u16>().map_err(Into::into))
        .map(|port| port + 1);

    assert_eq!(port.unwrap_or(80), 8081);
}

#[test]
fn config_pipeline_keeps_the_parse_failure() {
    let port = Optional::from_option(Some("not-a-port"))
        .try_map(|raw| raw.parse::<u16>().map_err(Into::into))
        .map(|port: u16| port + 1);

    assert!(port.is_absent());
    let reason = port.error().unwrap().to_string();
    assert!(reason.contains("invalid digit"), "unexpected reason: {reason}");
}

#[test]
fn missing_config_stays_silent_through_the_pipeline() {
    let port = Optional::<&str>::from_option(None)
        .try_map(|raw| raw.parse::<u16>().map_err(Into::into))
        .map(|port: u16| port + 1);

    assert!(port.is_absent());
    assert!(port.error().is_none());
    assert_eq!(port.unwrap_or(80), 80);
}

#[test]
fn deferred_computation_feeds_the_pipeline() {
    fn fetch_balance() -> (Option<i64>, Option<BoxedError>) {
        (Some(250), None)
    }

    let doubled = Optional::from_fn(fetch_balance).map(|cents| cents * 2);
    assert_eq!(doubled.must_get(), 500);
}

#[test]
fn into_result_separates_the_three_outcomes() {
    assert_eq!(Optional::of(1).into_result().unwrap(), 1);

    match Optional::<i32>::absent().into_result() {
        Err(OptionalError::Absent) => {}
        other => panic!("expected plain absence, got {other:?}"),
    }

    match Optional::<i32>::failed("boom").into_result() {
        Err(OptionalError::Failed(e)) => assert_eq!(e.to_string(), "boom"),
        other => panic!("expected carried failure, got {other:?}"),
    }
}

#[test]
#[should_panic(expected = "got both")]
fn constructing_with_value_and_error_is_a_contract_violation() {
    let _ = Optional::from_parts(Some("row"), Some("db timeout".into()));
}

#[test]
#[should_panic(expected = "got neither")]
fn constructing_with_neither_is_a_contract_violation() {
    let _ = Optional::<String>::from_parts(None, None);
}
