//! Error Display and Conversion Tests.

use std::io;

use bpsim_core::{ConfigError, SimError, TraceError};

#[test]
fn bits_out_of_range_names_field() {
    let err = ConfigError::BitsOutOfRange {
        field: "ghistory_bits",
        bits: 40,
        max: 30,
    };
    assert_eq!(err.to_string(), "ghistory_bits = 40 exceeds the maximum of 30 bits");
}

#[test]
fn trace_errors_carry_line_numbers() {
    let err = TraceError::InvalidOutcome {
        line: 7,
        value: "2".into(),
    };
    assert_eq!(
        err.to_string(),
        "line 7: invalid branch outcome '2' (expected 0 or 1)"
    );

    let err = TraceError::InvalidPc {
        line: 3,
        value: "zz".into(),
    };
    assert!(err.to_string().starts_with("line 3:"));
}

#[test]
fn sim_error_is_transparent() {
    let inner = ConfigError::UnknownPredictor("bimodal".into());
    let expected = inner.to_string();
    let err = SimError::from(inner);
    assert_eq!(err.to_string(), expected);
    assert!(matches!(err, SimError::Config(_)));

    let err = SimError::from(TraceError::from(io::Error::other("boom")));
    assert!(matches!(err, SimError::Trace(TraceError::Io(_))));
    assert_eq!(err.to_string(), "trace I/O error: boom");
}

#[test]
fn json_errors_convert() {
    let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
    let err = ConfigError::from(json_err);
    assert!(err.to_string().starts_with("invalid configuration JSON"));
}
