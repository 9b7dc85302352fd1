/// The parser state, the entry point and shared token helpers.
///
/// Holds the token cursor and the list of recoverable errors, and defines
/// [`core::Parser::parse`], which runs the grammar from its lowest
/// precedence level.
pub mod core;

/// Left-associative binary levels.
///
/// Equality, comparison, term and factor: each parses the next tighter level
/// for its operands and folds operators of its own level from left to right.
pub mod binary;

/// Prefix operators, primaries and literals.
///
/// Handles `-` and `!` (right-associative), parenthesized groups and the
/// conversion of literal tokens into typed values.
pub mod unary;
