use super::*;

// Native tests exercise the non-browser path, which must pass input through
// verbatim so SSR output stays deterministic.

#[test]
fn format_timestamp_passes_iso_through_on_server() {
    assert_eq!(
        format_timestamp("2024-05-01T12:30:00Z"),
        "2024-05-01T12:30:00Z"
    );
}

#[test]
fn format_timestamp_passes_garbage_through() {
    assert_eq!(format_timestamp("not a date"), "not a date");
}

#[test]
fn format_timestamp_passes_empty_through() {
    assert_eq!(format_timestamp(""), "");
}
