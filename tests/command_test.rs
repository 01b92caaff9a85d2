//! Command runner tests.
//!
//! Runs command lists against the sample book through the public API and
//! checks the captured console output and returned result.

use bookstrat::{Book, BookService, DEFAULT_COMMANDS, Error, SerializeFormat, run_with_writer};

const SAMPLE_XML: &str =
    "<book><title>Sample Book</title><content>This is some sample content.</content></book>";
const SAMPLE_JSON: &str = r#"{"title": "Sample Book", "content": "This is some sample content."}"#;

fn run_sample(commands: &[(&str, &str)]) -> (bookstrat::Result<Option<String>>, String) {
    let mut out = Vec::new();
    let result = run_with_writer(&Book::sample(), commands.iter().copied(), &mut out);
    (result, String::from_utf8(out).unwrap())
}

// ============================================================================
// Reference Sequences
// ============================================================================

#[test]
fn test_reverse_display_then_xml() {
    let (result, out) = run_sample(&[("display", "reverse"), ("serialize", "xml")]);

    assert_eq!(out, ".tnetnoc elpmas emos si sihT\n");
    assert_eq!(result.unwrap().as_deref(), Some(SAMPLE_XML));
}

#[test]
fn test_default_commands_match_reference_sequence() {
    let (result, out) = run_sample(&DEFAULT_COMMANDS);

    assert_eq!(out, ".tnetnoc elpmas emos si sihT\n");
    assert_eq!(result.unwrap().as_deref(), Some(SAMPLE_XML));
}

#[test]
fn test_serialize_json() {
    let (result, out) = run_sample(&[("serialize", "json")]);

    assert!(out.is_empty());
    assert_eq!(result.unwrap().as_deref(), Some(SAMPLE_JSON));
}

#[test]
fn test_print_console() {
    let (result, out) = run_sample(&[("print", "console")]);

    assert_eq!(out, "Printing the book: Sample Book\nThis is some sample content.\n");
    assert_eq!(result.unwrap(), None);
}

#[test]
fn test_print_reverse() {
    let (_, out) = run_sample(&[("print", "reverse")]);

    assert_eq!(
        out,
        "Printing the book in reverse: Sample Book...\n.tnetnoc elpmas emos si sihT\n"
    );
}

#[test]
fn test_output_follows_command_order() {
    let (result, out) = run_sample(&[
        ("print", "console"),
        ("display", "console"),
        ("serialize", "xml"),
        ("display", "reverse"),
        ("serialize", "json"),
    ]);

    assert_eq!(
        out,
        "Printing the book: Sample Book\nThis is some sample content.\n\
         This is some sample content.\n\
         .tnetnoc elpmas emos si sihT\n"
    );
    assert_eq!(result.unwrap().as_deref(), Some(SAMPLE_JSON));
}

#[test]
fn test_empty_command_list() {
    let (result, out) = run_sample(&[]);

    assert_eq!(result.unwrap(), None);
    assert!(out.is_empty());
}

// ============================================================================
// Invalid Commands
// ============================================================================

#[test]
fn test_unknown_variant_fails() {
    let (result, out) = run_sample(&[("display", "bogus")]);

    match result {
        Err(Error::InvalidCommand { command, variant }) => {
            assert_eq!(command, "display");
            assert_eq!(variant, "bogus");
        }
        other => panic!("Expected InvalidCommand, got {other:?}"),
    }
    assert!(out.is_empty());
}

#[test]
fn test_unknown_command_fails() {
    let (result, out) = run_sample(&[("unknown", "console")]);

    assert!(matches!(result, Err(Error::InvalidCommand { .. })));
    assert!(out.is_empty());
}

#[test]
fn test_failure_discards_earlier_serialize_result() {
    let (result, out) = run_sample(&[
        ("display", "console"),
        ("serialize", "json"),
        ("print", "xml"),
        ("display", "reverse"),
    ]);

    // No partial result, and output before the failure is not rolled back
    assert!(matches!(result, Err(Error::InvalidCommand { ref variant, .. }) if variant == "xml"));
    assert_eq!(out, "This is some sample content.\n");
}

// ============================================================================
// Orchestrator
// ============================================================================

#[test]
fn test_service_without_selection() {
    let service = BookService::new();
    let mut out = Vec::new();

    service.display(&Book::sample(), &mut out).unwrap();
    service.print_book(&Book::sample(), &mut out).unwrap();

    assert!(out.is_empty());
    assert_eq!(service.serialize(&Book::sample()), "");
}

#[test]
fn test_service_selection_is_inspectable() {
    let mut service = BookService::new();
    service.set_serialize_format(SerializeFormat::Json);

    assert_eq!(service.serialize_format(), Some(SerializeFormat::Json));
    assert_eq!(service.serialize(&Book::sample()), SAMPLE_JSON);
}
