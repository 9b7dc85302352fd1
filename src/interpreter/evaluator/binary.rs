use crate::{
    error::{RuntimeError, Side},
    interpreter::{
        evaluator::core::EvalResult,
        token::{Token, TokenKind},
        value::Value,
    },
};

/// The arithmetic performed by `+`, `-`, `*` and `/`.
///
/// Division follows IEEE-754: dividing by zero gives an infinity or NaN
/// rather than an error.
fn arithmetic(kind: TokenKind) -> Option<fn(f64, f64) -> f64> {
    match kind {
        TokenKind::Plus => Some(|a, b| a + b),
        TokenKind::Minus => Some(|a, b| a - b),
        TokenKind::Star => Some(|a, b| a * b),
        TokenKind::Slash => Some(|a, b| a / b),
        _ => None,
    }
}

/// The ordering performed by `>`, `>=`, `<` and `<=`.
fn comparison(kind: TokenKind) -> Option<fn(f64, f64) -> bool> {
    match kind {
        TokenKind::Greater => Some(|a, b| a > b),
        TokenKind::GreaterEq => Some(|a, b| a >= b),
        TokenKind::Less => Some(|a, b| a < b),
        TokenKind::LessEq => Some(|a, b| a <= b),
        _ => None,
    }
}

/// Coerces both operands to numbers, checking the left one first.
fn numeric_operands(left: &Value, operator: &Token, right: &Value) -> EvalResult<(f64, f64)> {
    let left = left.as_number(Side::Left, &operator.lexeme, operator.line)?;
    let right = right.as_number(Side::Right, &operator.lexeme, operator.line)?;
    Ok((left, right))
}

/// Applies a binary operator to two already evaluated operands.
///
/// The operator families behave as follows:
/// - Arithmetic (`+ - * /`): both operands are coerced to floats; the result
///   is always a float.
/// - Comparison (`> >= < <=`): both operands are coerced to floats; the
///   result is a boolean.
/// - Equality (`== !=`): operands are compared as they are. Values of
///   different types are never equal, so `1 == 1.0` is `false`.
///
/// # Errors
/// - `RuntimeError::OperandNotNumber` naming the offending side when an
///   arithmetic or comparison operand is not a number.
/// - `RuntimeError::UnsupportedOperator` for tokens that are not binary
///   operators.
///
/// # Example
/// ```
/// use fredlang::interpreter::{
///     evaluator::binary::eval_binary,
///     token::{Token, TokenKind},
///     value::Value,
/// };
///
/// let not_equal = Token::fixed(TokenKind::BangEq, 1);
/// let result = eval_binary(&Value::from("DIFFERENT"), &not_equal, &Value::from("different"));
/// assert_eq!(result.unwrap(), Value::Bool(true));
///
/// let plus = Token::fixed(TokenKind::Plus, 1);
/// assert_eq!(eval_binary(&Value::Integer(2), &plus, &Value::Float(0.5)).unwrap(),
///            Value::Float(2.5));
/// ```
pub fn eval_binary(left: &Value, operator: &Token, right: &Value) -> EvalResult<Value> {
    if let Some(apply) = arithmetic(operator.kind) {
        let (left, right) = numeric_operands(left, operator, right)?;
        return Ok(Value::Float(apply(left, right)));
    }

    if let Some(compare) = comparison(operator.kind) {
        let (left, right) = numeric_operands(left, operator, right)?;
        return Ok(Value::Bool(compare(left, right)));
    }

    match operator.kind {
        TokenKind::DoubleEq => Ok(Value::Bool(left == right)),
        TokenKind::BangEq => Ok(Value::Bool(left != right)),
        _ => Err(RuntimeError::UnsupportedOperator { operator: operator.lexeme.clone(),
                                                     line:     operator.line, }),
    }
}
