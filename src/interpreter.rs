/// The token model shared by every stage.
///
/// Declares the closed set of token kinds, the bijection between fixed
/// lexemes and kinds, and the `Token` record the scanner produces.
pub mod token;
/// The scanner turns source text into tokens.
///
/// Reads the raw source in a single pass and produces the token sequence
/// along with every lexical error found on the way.
///
/// # Responsibilities
/// - Recognises literals, identifiers, keywords and operators by maximal
///   munch.
/// - Tracks the line each token starts on.
/// - Records lexical errors without stopping.
pub mod lexer;
/// The parser builds the syntax tree from tokens.
///
/// A recursive-descent parser with one function per precedence level. It
/// collects recoverable errors and stops on fatal ones.
pub mod parser;
/// The evaluator reduces a syntax tree to a value.
///
/// # Responsibilities
/// - Evaluates literals, groups, unary and binary nodes.
/// - Applies the numeric coercions of arithmetic and comparison.
/// - Reports runtime errors such as type mismatches.
pub mod evaluator;
/// Runtime values.
///
/// Defines the `Value` enum produced by evaluation, together with its
/// numeric coercion and display rules.
pub mod value;
