//! Test utilities for CSV preview parser testing
//!
//! Builders for CSV text shared by the parser and inference test modules.

mod parser_tests;

/// Build CSV text with a header line and `rows` numbered data lines
pub fn create_numbered_csv(rows: usize) -> String {
    let mut content = String::from("id,label,active\n");
    for i in 1..=rows {
        content.push_str(&format!("{},row {},{}\n", i, i, i % 2 == 0));
    }
    content
}

/// The mixed-type sample used across parser tests
pub fn create_sample_csv() -> String {
    "name,age,member,notes\r\n\
     Alice,34,TRUE,\r\n\
     Bob,  27 ,false,likes tea\r\n\
     \r\n\
     Carol,0.0,yes,  \r\n"
        .to_string()
}
