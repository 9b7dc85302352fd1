//! # fredlang
//!
//! fredlang is a small expression language written in Rust. Source text is
//! scanned into tokens, parsed into a syntax tree by a recursive-descent
//! parser and reduced to a value by a tree-walking evaluator.
//!
//! ```
//! use fredlang::{execute, interpreter::value::Value};
//!
//! assert_eq!(execute("(1 + 2) * 3 >= 9").unwrap(), Value::Bool(true));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::{debug, trace};

use crate::{
    error::InterpretError,
    interpreter::{evaluator::core::evaluate, lexer::scan, parser::core::Parser, value::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` tree and the literal payloads stored in
/// its leaves. The tree is built by the parser and walked by the evaluator.
pub mod ast;
/// Provides unified error types for every stage.
///
/// This module defines the errors raised while scanning, parsing and
/// evaluating, each carrying the source line it refers to.
///
/// # Responsibilities
/// - Defines one error enum per stage plus the pipeline-level
///   `InterpretError`.
/// - Renders every error as a one-line `Error on line N: ...` diagnostic.
/// - Implements the standard error traits.
pub mod error;
/// Ties the stages of the interpreter together.
///
/// Exposes the token model, the scanner, the parser, the evaluator and the
/// runtime value type.
pub mod interpreter;
/// The interactive read-eval-print loop.
pub mod repl;

/// Scans, parses and evaluates `source`.
///
/// Each stage only runs when the previous one reported nothing: lexical
/// errors stop the pipeline before parsing, and any parse error, fatal or
/// recoverable, stops it before evaluation.
///
/// # Errors
/// Returns the first stage that failed together with all of its
/// diagnostics, in source order.
///
/// # Examples
/// ```
/// use fredlang::{error::InterpretError, execute, interpreter::value::Value};
///
/// assert_eq!(execute("30.0 / 5.0").unwrap(), Value::Float(6.0));
/// assert_eq!(execute("\"DIFFERENT\" != \"different\"").unwrap(), Value::Bool(true));
///
/// // A stray character is a lexical error.
/// assert!(matches!(execute("1 @ 2"), Err(InterpretError::Scan(_))));
///
/// // `!` only accepts booleans.
/// assert!(matches!(execute("!10"), Err(InterpretError::Runtime(_))));
/// ```
pub fn execute(source: &str) -> Result<Value, InterpretError> {
    let (tokens, scan_errors) = scan(source);
    if !scan_errors.is_empty() {
        debug!("scanning failed with {} errors", scan_errors.len());
        return Err(InterpretError::Scan(scan_errors));
    }

    let expr = Parser::new(&tokens).parse_all().map_err(|errors| {
                                                  debug!("parsing failed with {} errors",
                                                         errors.len());
                                                  InterpretError::Parse(errors)
                                              })?;

    trace!("evaluating {expr}");
    Ok(evaluate(&expr)?)
}
