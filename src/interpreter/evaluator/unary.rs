use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        token::{Token, TokenKind},
        value::Value,
    },
};

/// Applies a unary operator to an already evaluated operand.
///
/// Supported operators:
/// - `-`: numeric negation. The result keeps the operand's type, so negating
///   an integer gives an integer.
/// - `!`: boolean negation.
///
/// # Errors
/// - `RuntimeError::InvalidUnaryOperand` when the operand has the wrong type
///   for the operator (`!10`, `-"text"`).
/// - `RuntimeError::Overflow` when negating `i64::MIN`.
/// - `RuntimeError::UnsupportedOperator` for any other operator token.
///
/// # Example
/// ```
/// use fredlang::interpreter::{
///     evaluator::unary::eval_unary,
///     token::{Token, TokenKind},
///     value::Value,
/// };
///
/// let minus = Token::fixed(TokenKind::Minus, 1);
/// assert_eq!(eval_unary(&minus, &Value::Integer(10)).unwrap(), Value::Integer(-10));
///
/// let bang = Token::fixed(TokenKind::Bang, 1);
/// assert_eq!(eval_unary(&bang, &Value::Bool(false)).unwrap(), Value::Bool(true));
/// assert!(eval_unary(&bang, &Value::Integer(10)).is_err());
/// ```
pub fn eval_unary(operator: &Token, value: &Value) -> EvalResult<Value> {
    let line = operator.line;

    match (operator.kind, value) {
        (TokenKind::Minus, Value::Integer(n)) => {
            n.checked_neg()
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { line })
        },
        (TokenKind::Minus, Value::Float(x)) => Ok(Value::Float(-x)),
        (TokenKind::Bang, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (TokenKind::Minus | TokenKind::Bang, _) => {
            Err(RuntimeError::InvalidUnaryOperand { operator: operator.lexeme.clone(),
                                                    found: value.type_name(),
                                                    line })
        },
        _ => Err(RuntimeError::UnsupportedOperator { operator: operator.lexeme.clone(),
                                                     line }),
    }
}
