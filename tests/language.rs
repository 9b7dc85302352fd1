use std::fs;

use fredlang::{error::InterpretError, execute, interpreter::value::Value};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_fred_blocks(&content).into_iter().enumerate() {
            count += 1;
            match execute(&code) {
                Ok(value) => assert_eq!(value,
                                        Value::Bool(true),
                                        "example {} in {:?} is not a passing check:\n{}",
                                        i + 1,
                                        path,
                                        code),
                Err(e) => panic!("example {} in {:?} failed:\n{}\nError: {}", i + 1, path, code, e),
            }
        }
    }

    assert!(count > 0, "No fred examples found in book/src");
}

#[test]
fn example_file_evaluates() {
    let source = fs::read_to_string("tests/example.fred").expect("tests/example.fred is missing");
    assert_eq!(execute(&source), Ok(Value::Bool(true)));
}

/// Collects the bodies of all ```` ```fred ```` fenced blocks.
fn extract_fred_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if !inside && trimmed.starts_with("```fred") {
            inside = true;
            buf.clear();
        } else if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
        } else if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_true(src: &str) {
    match execute(src) {
        Ok(Value::Bool(true)) => {},
        Ok(other) => panic!("'{src}' evaluated to {other}, expected true"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) -> InterpretError {
    match execute(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn arithmetic() {
    assert_true("1 + 2 == 3.0");
    assert_true("7 * 9 == 63.0");
    assert_true("8 - 5 == 3.0");
    assert_true("10 / 4 == 2.5");
    assert_true("2 + 3 * 4 == 14.0");
    assert_true("(2 + 3) * 4 == 20.0");
    assert_true("9007199254740993 > 1");
    assert_true("9007199254740992 * 1 == 9007199254740992.0");
    assert_true("-(2 + 3) == -5.0");
}

#[test]
fn comparisons() {
    assert_true("2 < 3");
    assert_true("3 > 2");
    assert_true("2 <= 2");
    assert_true("3 >= 3");
    assert_true("2.5 > 2");
    assert_true("(1 < 2) == true");
}

#[test]
fn equality_and_negation() {
    assert_true("2 != 3");
    assert_true("2 == 2");
    assert_true("!false");
    assert_true("!!true");
    assert_true("null == null");
    assert_true("\"a\" != \"A\"");
    assert_true("1 != 1.0");
    assert_true("-1 == -1");
}

#[test]
fn whitespace_and_newlines_are_insignificant() {
    assert_true("1\n+\n2\n==\n3.0");
    assert_true("\t 1 \r\n < 2 ");
}

#[test]
fn values_print_naturally() {
    assert_eq!(execute("\"hello\"").map(|v| v.to_string()), Ok("hello".to_string()));
    assert_eq!(execute("6 / 4").map(|v| v.to_string()), Ok("1.5".to_string()));
    assert_eq!(execute("-7").map(|v| v.to_string()), Ok("-7".to_string()));
    assert_eq!(execute("null").map(|v| v.to_string()), Ok("null".to_string()));
}

#[test]
fn lexical_errors_stop_the_pipeline() {
    let error = assert_failure("1 + \"open");
    assert!(matches!(&error, InterpretError::Scan(errors) if errors.len() == 1));

    let error = assert_failure("1 $ 2 % 3");
    assert_eq!(error.to_string(),
               "Error on line 1: Unexpected token '$'.\nError on line 1: Unexpected token '%'.");
}

#[test]
fn parse_errors_stop_the_pipeline() {
    assert!(matches!(assert_failure("(1 + 2"), InterpretError::Parse(_)));
    assert!(matches!(assert_failure("1 +"), InterpretError::Parse(_)));
    assert!(matches!(assert_failure("1 2"), InterpretError::Parse(_)));
    assert!(matches!(assert_failure("var"), InterpretError::Parse(_)));
}

#[test]
fn runtime_errors() {
    assert!(matches!(assert_failure("!10"), InterpretError::Runtime(_)));
    assert!(matches!(assert_failure("-\"text\""), InterpretError::Runtime(_)));
    assert!(matches!(assert_failure("\"a\" + \"b\""), InterpretError::Runtime(_)));
    assert!(matches!(assert_failure("true < false"), InterpretError::Runtime(_)));

    assert_eq!(assert_failure("1 +\n null").to_string(),
               "Error on line 1: right operand of '+' is not a number (found null).");
}
