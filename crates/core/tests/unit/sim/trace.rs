//! Trace Reader Tests.

use std::io::{Cursor, Write};

use bpsim_core::TraceError;
use bpsim_core::sim::trace::parse_line;
use bpsim_core::sim::{BranchRecord, TraceReader};
use rstest::rstest;

use crate::common::{N, T};

#[rstest]
#[case("0x40061c 1", BranchRecord::new(0x0040_061C, T))]
#[case("0X40061C 0", BranchRecord::new(0x0040_061C, N))]
#[case("40061c 1", BranchRecord::new(0x0040_061C, T))]
#[case("  ffffffff\t0  ", BranchRecord::new(0xFFFF_FFFF, N))]
#[case("0x0 1", BranchRecord::new(0, T))]
fn parses_records(#[case] line: &str, #[case] expected: BranchRecord) {
    assert_eq!(parse_line(1, line).unwrap(), Some(expected));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("# comment")]
#[case("  #0x4 1")]
fn skips_blank_and_comment_lines(#[case] line: &str) {
    assert_eq!(parse_line(1, line).unwrap(), None);
}

#[rstest]
#[case("0x40061c")]
#[case("0x40061c 1 extra")]
fn rejects_wrong_field_count(#[case] line: &str) {
    let err = parse_line(4, line).unwrap_err();
    assert!(matches!(err, TraceError::Malformed { line: 4, .. }), "{err}");
}

#[rstest]
#[case("0xg0 1")]
#[case("0x 1")]
#[case("0x100000000 1")]
#[case("-4 0")]
#[case("+1f 1")]
#[case("0x+1f 1")]
#[case("0x-0 0")]
fn rejects_bad_pc(#[case] line: &str) {
    let err = parse_line(2, line).unwrap_err();
    assert!(matches!(err, TraceError::InvalidPc { line: 2, .. }), "{err}");
}

#[rstest]
#[case("0x4 2")]
#[case("0x4 T")]
#[case("0x4 01")]
fn rejects_bad_outcome(#[case] line: &str) {
    let err = parse_line(9, line).unwrap_err();
    assert!(matches!(err, TraceError::InvalidOutcome { line: 9, .. }), "{err}");
}

#[test]
fn reader_yields_records_in_order() {
    let text = "# header\n0x10 1\n\n0x14 0\n0x10 1\n";
    let records: Vec<_> = TraceReader::new(Cursor::new(text))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        records,
        vec![
            BranchRecord::new(0x10, T),
            BranchRecord::new(0x14, N),
            BranchRecord::new(0x10, T),
        ]
    );
}

#[test]
fn reader_reports_physical_line_numbers_and_continues() {
    let text = "0x10 1\n# skip\nbad\n0x14 0\n";
    let items: Vec<_> = TraceReader::new(Cursor::new(text)).collect();
    assert_eq!(items.len(), 3);
    assert!(items[0].is_ok());
    assert!(matches!(items[1], Err(TraceError::Malformed { line: 3, .. })));
    assert_eq!(items[2].as_ref().unwrap(), &BranchRecord::new(0x14, N));
}

#[test]
fn empty_input_yields_nothing() {
    assert_eq!(TraceReader::new(Cursor::new("")).count(), 0);
}

#[test]
fn reads_trace_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "0x400000 1\r\n0x400004 0\r\n").unwrap();
    file.flush().unwrap();

    let records: Vec<_> = TraceReader::from_path(file.path())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        records,
        vec![BranchRecord::new(0x40_0000, T), BranchRecord::new(0x40_0004, N)]
    );
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TraceReader::from_path(dir.path().join("absent.trace")).unwrap_err();
    assert!(matches!(err, TraceError::Io(_)));
}
