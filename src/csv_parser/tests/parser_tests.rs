//! Tests for the CSV preview parser

use super::*;
use crate::config::PreviewConfig;
use crate::csv_parser::{CsvParser, parse_csv};
use crate::error::PreviewError;
use crate::models::{Cell, Row};

#[test]
fn test_end_to_end_example() {
    let dataset = parse_csv("a,b,c\n1,true,\n2,false,x\n", "example.csv").unwrap();

    assert_eq!(dataset.headers, vec!["a", "b", "c"]);
    assert_eq!(dataset.source_name, "example.csv");

    let expected = vec![
        Row::from_iter([
            ("a", Cell::Number(1.0)),
            ("b", Cell::Boolean(true)),
            ("c", Cell::Null),
        ]),
        Row::from_iter([
            ("a", Cell::Number(2.0)),
            ("b", Cell::Boolean(false)),
            ("c", Cell::Text("x".to_string())),
        ]),
    ];
    assert_eq!(dataset.rows, expected);
}

#[test]
fn test_mixed_sample_with_crlf_and_blank_lines() {
    let dataset = parse_csv(&create_sample_csv(), "members.csv").unwrap();

    assert_eq!(dataset.column_count(), 4);
    assert_eq!(dataset.row_count(), 3);

    assert_eq!(dataset.cell(0, "name"), Some(&Cell::Text("Alice".into())));
    assert_eq!(dataset.cell(0, "member"), Some(&Cell::Boolean(true)));
    assert_eq!(dataset.cell(0, "notes"), Some(&Cell::Null));

    assert_eq!(dataset.cell(1, "age"), Some(&Cell::Number(27.0)));
    assert_eq!(
        dataset.cell(1, "notes"),
        Some(&Cell::Text("likes tea".into()))
    );

    assert_eq!(dataset.cell(2, "age"), Some(&Cell::Number(0.0)));
    assert_eq!(dataset.cell(2, "member"), Some(&Cell::Text("yes".into())));
    assert_eq!(dataset.cell(2, "notes"), Some(&Cell::Null));
}

#[test]
fn test_header_count_matches_header_line() {
    let dataset = parse_csv(" x , y ,z,  \n1,2,3,4\n", "h.csv").unwrap();

    assert_eq!(dataset.headers, vec!["x", "y", "z", ""]);
    assert_eq!(dataset.rows[0].len(), 4);
    assert_eq!(dataset.cell(0, ""), Some(&Cell::Number(4.0)));
}

#[test]
fn test_row_cap_keeps_first_rows_in_order() {
    let dataset = parse_csv(&create_numbered_csv(15), "big.csv").unwrap();

    assert_eq!(dataset.row_count(), 10);
    for (index, row) in dataset.rows.iter().enumerate() {
        assert_eq!(row.get("id"), Some(&Cell::Number((index + 1) as f64)));
    }
}

#[test]
fn test_fewer_rows_than_cap() {
    let dataset = parse_csv(&create_numbered_csv(4), "small.csv").unwrap();
    assert_eq!(dataset.row_count(), 4);
}

#[test]
fn test_header_only_file() {
    let dataset = parse_csv("a,b\n\n   \n", "headers.csv").unwrap();

    assert_eq!(dataset.headers, vec!["a", "b"]);
    assert!(dataset.rows.is_empty());
    assert!(!dataset.is_empty());
}

#[test]
fn test_blank_lines_do_not_consume_row_slots() {
    let mut content = String::from("\n\nid\n");
    for i in 1..=12 {
        content.push_str(&format!("{}\n \t \n", i));
    }

    let dataset = parse_csv(&content, "gaps.csv").unwrap();
    assert_eq!(dataset.row_count(), 10);
    assert_eq!(dataset.cell(9, "id"), Some(&Cell::Number(10.0)));
}

#[test]
fn test_short_row_fills_nulls() {
    let dataset = parse_csv("a,b,c\n1,2\n", "short.csv").unwrap();

    let row = &dataset.rows[0];
    assert_eq!(row.len(), 3);
    assert_eq!(row.get("c"), Some(&Cell::Null));
}

#[test]
fn test_extra_values_are_discarded() {
    let dataset = parse_csv("a,b\n1,2,3,4\n", "long.csv").unwrap();

    let row = &dataset.rows[0];
    assert_eq!(row.len(), 2);
    assert_eq!(row.keys().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_duplicate_headers_last_write_wins() {
    let dataset = parse_csv("v,w,v\n1,2,3\n", "dup.csv").unwrap();

    assert_eq!(dataset.headers, vec!["v", "w", "v"]);
    assert_eq!(dataset.rows[0].len(), 2);
    assert_eq!(dataset.cell(0, "v"), Some(&Cell::Number(3.0)));
}

#[test]
fn test_quoted_commas_are_delimiters() {
    let dataset = parse_csv("a,b\n\"x,y\"\n", "quoted.csv").unwrap();

    assert_eq!(dataset.cell(0, "a"), Some(&Cell::Text("\"x".into())));
    assert_eq!(dataset.cell(0, "b"), Some(&Cell::Text("y\"".into())));
}

#[test]
fn test_empty_text_fails() {
    let err = parse_csv("", "empty.csv").unwrap_err();
    assert!(matches!(err, PreviewError::EmptyFile { ref name } if name == "empty.csv"));
    assert_eq!(err.to_string(), "The CSV file is empty");
}

#[test]
fn test_blank_only_text_fails() {
    let result = parse_csv("\n  \r\n\t\n\r\n", "blank.csv");
    assert!(matches!(result, Err(PreviewError::EmptyFile { .. })));
}

#[test]
fn test_parse_is_idempotent() {
    let text = create_sample_csv();
    let parser = CsvParser::new();

    let first = parser.parse(&text, "same.csv").unwrap();
    let second = parser.parse(&text, "same.csv").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_configured_row_limit() {
    let config = PreviewConfig::default().with_preview_rows(3);
    let parser = CsvParser::from_config(&config);
    assert_eq!(parser.row_limit(), 3);

    let dataset = parser.parse(&create_numbered_csv(8), "three.csv").unwrap();
    assert_eq!(dataset.row_count(), 3);
}

#[test]
fn test_configured_row_limit_never_exceeds_cap() {
    let config = PreviewConfig::default().with_preview_rows(50);
    let parser = CsvParser::from_config(&config);
    assert_eq!(parser.row_limit(), 10);
}

#[test]
fn test_byte_order_marks_inside_fields_are_trimmed() {
    let text = "id,\u{FEFF}qty\n1,\u{FEFF}5\u{FEFF}\n\u{FEFF}\n2,3\n";
    let dataset = parse_csv(text, "marks.csv").unwrap();

    assert_eq!(dataset.headers, vec!["id", "qty"]);
    assert_eq!(dataset.row_count(), 2);
    assert_eq!(dataset.cell(0, "qty"), Some(&Cell::Number(5.0)));
    assert_eq!(dataset.cell(1, "qty"), Some(&Cell::Number(3.0)));
}
