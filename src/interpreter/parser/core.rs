use std::{iter::Peekable, slice::Iter};

use log::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::token::{Token, TokenKind},
};

/// Result type used by the parser.
///
/// An `Err` always carries a fatal error; recoverable ones are collected on
/// the [`Parser`] instead.
pub type ParseResult<T> = Result<T, ParseError>;

/// The outcome of a parse attempt that did not hit a fatal error.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// The best-effort tree. Only meaningful when `errors` is empty.
    pub expr:   Expr,
    /// Recoverable errors, in the order they were found.
    pub errors: Vec<ParseError>,
}

impl Parsed {
    /// Returns `true` when no error was recorded, meaning `expr` may be
    /// evaluated.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Recursive-descent parser over a scanned token sequence.
///
/// The grammar, from lowest to highest precedence:
///
/// ```text
/// expression := equality
/// equality   := comparison (("==" | "!=") comparison)*
/// comparison := term ((">" | ">=" | "<" | "<=") term)*
/// term       := factor (("+" | "-") factor)*
/// factor     := unary (("*" | "/") unary)*
/// unary      := ("-" | "!") unary | primary
/// primary    := literal | "(" expression ")"
/// ```
///
/// Recoverable errors are collected while parsing goes on; fatal errors are
/// returned through `Err` and end the attempt.
///
/// # Example
/// ```
/// use fredlang::interpreter::{lexer::scan, parser::core::Parser};
///
/// let (tokens, _) = scan("1 + 2 * 3 == 7");
/// let parsed = Parser::new(&tokens).parse().unwrap();
///
/// assert!(parsed.is_clean());
/// assert_eq!(parsed.expr.to_string(), "((1 + (2 * 3)) == 7)");
/// ```
pub struct Parser<'a> {
    tokens:    Peekable<Iter<'a, Token>>,
    errors:    Vec<ParseError>,
    last_line: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens`.
    ///
    /// The sequence normally ends with an `Eof` token, but running out of
    /// tokens is treated the same way.
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens:    tokens.iter().peekable(),
               errors:    Vec::new(),
               last_line: 1, }
    }

    /// Parses one complete expression.
    ///
    /// Tokens left over after the expression are reported as
    /// [`ParseError::UnexpectedTrailingToken`] unless another error was
    /// already recorded.
    ///
    /// # Errors
    /// Returns the fatal error that stopped parsing:
    /// [`ParseError::UnterminatedGroup`] or [`ParseError::MalformedLiteral`].
    pub fn parse(mut self) -> ParseResult<Parsed> {
        let expr = self.parse_expression()?;
        self.check_trailing();

        Ok(Parsed { expr,
                    errors: self.errors })
    }

    /// Parses one complete expression, succeeding only if nothing at all
    /// went wrong.
    ///
    /// # Errors
    /// Every error in the order it was found. A fatal error, if one stopped
    /// parsing, comes last.
    ///
    /// # Example
    /// ```
    /// use fredlang::{
    ///     error::ParseError,
    ///     interpreter::{lexer::scan, parser::core::Parser},
    /// };
    ///
    /// let (tokens, _) = scan("(* 1");
    /// let errors = Parser::new(&tokens).parse_all().unwrap_err();
    ///
    /// assert_eq!(errors.len(), 2);
    /// assert!(!errors[0].is_fatal());
    /// assert_eq!(errors[1], ParseError::UnterminatedGroup { line: 1 });
    /// ```
    pub fn parse_all(mut self) -> Result<Expr, Vec<ParseError>> {
        match self.parse_expression() {
            Ok(expr) => {
                self.check_trailing();
                if self.errors.is_empty() { Ok(expr) } else { Err(self.errors) }
            },
            Err(fatal) => {
                self.record(fatal);
                Err(self.errors)
            },
        }
    }

    fn check_trailing(&mut self) {
        if self.errors.is_empty()
           && let Some(token) = self.peek()
           && token.kind != TokenKind::Eof
        {
            self.record(ParseError::UnexpectedTrailingToken { token: token.lexeme.clone(),
                                                              line:  token.line, });
        }
    }

    /// Parses a full expression, starting at the lowest precedence level.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_equality()
    }

    /// Recoverable errors recorded so far.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub(crate) fn peek(&mut self) -> Option<&'a Token> {
        self.tokens.peek().copied()
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.next()?;
        self.last_line = token.line;
        Some(token)
    }

    /// Consumes the next token if its kind is one of `kinds`.
    pub(crate) fn next_if_kind(&mut self, kinds: &[TokenKind]) -> Option<&'a Token> {
        let token = self.tokens.next_if(|token| kinds.contains(&token.kind))?;
        self.last_line = token.line;
        Some(token)
    }

    /// Line of the most recently consumed token, used for errors at the end
    /// of input.
    pub(crate) const fn last_line(&self) -> usize {
        self.last_line
    }

    pub(crate) fn record(&mut self, error: ParseError) {
        debug!("{error}");
        self.errors.push(error);
    }
}
