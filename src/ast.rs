use crate::interpreter::token::Token;

/// A literal value exactly as it appeared in source code.
///
/// `Literal` is what the parser stores in a [`Primary`] node. At evaluation
/// time it becomes a runtime [`Value`](crate::interpreter::value::Value).
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A string literal, without its quotes.
    String(String),
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// `true` or `false`.
    Bool(bool),
    /// `null`.
    Null,
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Lets an unsuffixed integer build a node, as in `Expr::literal(5)`.
impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl std::fmt::Display for Literal {
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

/// The payload of a primary expression: a literal, or a parenthesized
/// sub-expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    /// A literal value.
    Literal(Literal),
    /// `( expression )`
    Group(Box<Expr>),
}

/// An abstract syntax tree node.
///
/// Nodes own their children, so a tree has no sharing and no cycles.
/// Operators are kept as the tokens they were scanned from, which keeps the
/// operator's line for error reporting.
///
/// The [`Display`](std::fmt::Display) implementation renders the canonical,
/// fully parenthesized form used for diagnostics:
///
/// ```
/// use fredlang::{
///     ast::{Expr, Literal},
///     interpreter::token::{Token, TokenKind},
/// };
///
/// let product = Expr::binary(Expr::literal(5),
///                            Token::fixed(TokenKind::Star, 1),
///                            Expr::literal(12));
/// assert_eq!(product.to_string(), "(5 * 12)");
///
/// let negated = Expr::unary(Token::fixed(TokenKind::Minus, 1), Expr::literal(10));
/// assert_eq!(negated.to_string(), "(-10)");
///
/// let group = Expr::group(Expr::literal(Literal::Null));
/// assert_eq!(group.to_string(), "(null)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal or a grouped expression.
    Primary(Primary),
    /// A prefix operation, `-x` or `!x`.
    Unary {
        /// The operator token.
        operator: Token,
        /// The operand expression.
        operand:  Box<Self>,
    },
    /// An infix operation such as `a + b` or `a == b`.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
}

impl Expr {
    /// Builds a literal primary node.
    pub fn literal(value: impl Into<Literal>) -> Self {
        Self::Primary(Primary::Literal(value.into()))
    }

    /// Wraps `inner` in a group primary node.
    #[must_use]
    pub fn group(inner: Self) -> Self {
        Self::Primary(Primary::Group(Box::new(inner)))
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(operator: Token, operand: Self) -> Self {
        Self::Unary { operator,
                      operand: Box::new(operand) }
    }

    /// Builds a binary node.
    #[must_use]
    pub fn binary(left: Self, operator: Token, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       operator,
                       right: Box::new(right) }
    }

    /// The depth of the tree rooted at this node; a lone literal has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Primary(Primary::Literal(_)) => 1,
            Self::Primary(Primary::Group(inner)) => 1 + inner.depth(),
            Self::Unary { operand, .. } => 1 + operand.depth(),
            Self::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary(Primary::Literal(literal)) => write!(f, "{literal}"),
            Self::Primary(Primary::Group(inner)) => write!(f, "({inner})"),
            Self::Unary { operator, operand } => write!(f, "({}{operand})", operator.lexeme),
            Self::Binary { left,
                           operator,
                           right, } => write!(f, "({left} {} {right})", operator.lexeme),
        }
    }
}

impl From<Literal> for Expr {
    fn from(literal: Literal) -> Self {
        Self::Primary(Primary::Literal(literal))
    }
}
