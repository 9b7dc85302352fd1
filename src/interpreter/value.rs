use crate::{
    ast::Literal,
    error::{RuntimeError, Side},
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// Values are dynamically typed but the set of types is closed. Equality is
/// structural and never coerces: `Integer(1)` and `Float(1.0)` are different
/// values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string.
    String(String),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// A boolean, produced by literals, comparisons, equality and `!`.
    Bool(bool),
    /// The absent value.
    Null,
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::String(s) => Self::String(s.clone()),
            Literal::Integer(n) => Self::Integer(*n),
            Literal::Float(x) => Self::Float(*x),
            Literal::Bool(b) => Self::Bool(*b),
            Literal::Null => Self::Null,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl Value {
    /// The name of the value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
        }
    }

    /// Coerces the value to an `f64` for use as an operand of `operator`.
    ///
    /// Accepts `Value::Float` and `Value::Integer`. Integers outside
    /// ±2^53 are rounded to the nearest float.
    ///
    /// # Parameters
    /// - `side`: Which operand this value is, for error reporting.
    /// - `operator`: The operator lexeme, for error reporting.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a float or an integer.
    /// - `Err(RuntimeError::OperandNotNumber)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use fredlang::{error::Side, interpreter::value::Value};
    ///
    /// assert_eq!(Value::Integer(10).as_number(Side::Left, "+", 1).unwrap(), 10.0);
    /// assert!(Value::from("10").as_number(Side::Right, "+", 1).is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self, side: Side, operator: &str, line: usize) -> EvalResult<f64> {
        match self {
            Self::Float(x) => Ok(*x),
            Self::Integer(n) => Ok(*n as f64),
            _ => Err(RuntimeError::OperandNotNumber { side,
                                                      operator: operator.to_string(),
                                                      found: self.type_name(),
                                                      line }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
        }
    }
}
