/// Binary operator evaluation logic.
///
/// Arithmetic and comparison on numbers, and structural equality on any pair
/// of values.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Numeric negation and boolean negation.
pub mod unary;

/// Core evaluation logic.
///
/// Walks the tree, evaluating operands before the operator that combines
/// them.
pub mod core;
