use crate::interpreter::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building the syntax tree.
///
/// Errors are either recoverable (recorded while parsing continues) or fatal
/// (the current parse attempt is abandoned). See [`ParseError::is_fatal`].
pub enum ParseError {
    /// A `(` was never matched by a `)`. Fatal.
    UnterminatedGroup {
        /// The source line of the opening parenthesis.
        line: usize,
    },
    /// No primary expression can start at this token. Recoverable.
    ExpectedExpression {
        /// The token found instead, or `end of input`.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Tokens remained after a complete expression. Recoverable.
    UnexpectedTrailingToken {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit in 64 bits. Recoverable.
    LiteralTooLarge {
        /// The literal text.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A literal token whose text does not parse as its own kind.
    ///
    /// Only a scanner bug or a hand-built token list can produce this, so it
    /// is fatal.
    MalformedLiteral {
        /// The claimed token kind.
        kind:   TokenKind,
        /// The literal text.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl ParseError {
    /// Returns `true` for errors that abandon the whole parse attempt.
    ///
    /// # Example
    /// ```
    /// use fredlang::error::ParseError;
    ///
    /// assert!(ParseError::UnterminatedGroup { line: 1 }.is_fatal());
    /// assert!(!ParseError::ExpectedExpression { found: "+".to_string(),
    ///                                           line:  1, }.is_fatal());
    /// ```
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self,
                 Self::UnterminatedGroup { .. } | Self::MalformedLiteral { .. })
    }

    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnterminatedGroup { line }
            | Self::ExpectedExpression { line, .. }
            | Self::UnexpectedTrailingToken { line, .. }
            | Self::LiteralTooLarge { line, .. }
            | Self::MalformedLiteral { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedGroup { line } => {
                write!(f, "Error on line {line}: Unterminated group expression, expected ')'.")
            },
            Self::ExpectedExpression { found, line } => {
                write!(f, "Error on line {line}: Literal expected, found {found}.")
            },
            Self::UnexpectedTrailingToken { token, line } => write!(f,
                                                                    "Error on line {line}: Extra tokens after expression: {token}."),
            Self::LiteralTooLarge { lexeme, line } => {
                write!(f, "Error on line {line}: Literal {lexeme} is too large.")
            },
            Self::MalformedLiteral { kind, lexeme, line } => write!(f,
                                                                    "Error on line {line}: Cannot read '{lexeme}' as a {kind:?} literal."),
        }
    }
}

impl std::error::Error for ParseError {}
