use crate::{
    ast::{Expr, Primary},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::eval_binary, unary::eval_unary},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Expr {
    /// Evaluates the tree rooted at this node.
    ///
    /// Evaluation is a pure function of the tree. Groups evaluate to their
    /// inner expression, unary nodes evaluate their operand first, and binary
    /// nodes evaluate the left operand completely before the right one; if
    /// the left operand fails, the right one is never evaluated.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised anywhere in the tree.
    ///
    /// # Example
    /// ```
    /// use fredlang::{
    ///     ast::Expr,
    ///     interpreter::{
    ///         token::{Token, TokenKind},
    ///         value::Value,
    ///     },
    /// };
    ///
    /// let quotient = Expr::binary(Expr::literal(30.0),
    ///                             Token::fixed(TokenKind::Slash, 1),
    ///                             Expr::literal(5.0));
    ///
    /// assert_eq!(quotient.eval().unwrap(), Value::Float(6.0));
    /// ```
    pub fn eval(&self) -> EvalResult<Value> {
        match self {
            Self::Primary(Primary::Literal(literal)) => Ok(Value::from(literal)),
            Self::Primary(Primary::Group(inner)) => inner.eval(),
            Self::Unary { operator, operand } => {
                let value = operand.eval()?;
                eval_unary(operator, &value)
            },
            Self::Binary { left,
                           operator,
                           right, } => {
                let left = left.eval()?;
                let right = right.eval()?;
                eval_binary(&left, operator, &right)
            },
        }
    }
}

/// Evaluates `expr`; the free-function form of [`Expr::eval`].
pub fn evaluate(expr: &Expr) -> EvalResult<Value> {
    expr.eval()
}
