use std::num::IntErrorKind;

use crate::{
    ast::{Expr, Literal},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Unary operators are right-associative, so `!!false` is parsed as
    /// `!(!false)` and `--1` as `-(-1)`.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("-" | "!") unary
    ///            | primary
    /// ```
    pub fn parse_unary(&mut self) -> ParseResult<Expr> {
        if let Some(operator) = self.next_if_kind(&[TokenKind::Minus, TokenKind::Bang]) {
            let operand = self.parse_unary()?;
            return Ok(Expr::unary(operator.clone(), operand));
        }

        self.parse_primary()
    }

    /// Parses a primary expression: a literal or a parenthesized group.
    ///
    /// When no primary expression can start at the current token, a
    /// [`ParseError::ExpectedExpression`] is recorded, the token is left in
    /// place and a `null` literal stands in for the missing expression. At the
    /// end of input the error points at the line of the last token read.
    ///
    /// Grammar:
    /// ```text
    ///     primary := STRING | INTEGER | FLOAT | "true" | "false" | "null"
    ///              | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// [`ParseError::UnterminatedGroup`] when a `(` is not closed, and any
    /// fatal error from [`Parser::parse_literal`].
    pub fn parse_primary(&mut self) -> ParseResult<Expr> {
        if let Some(open) = self.next_if_kind(&[TokenKind::LParen]) {
            let inner = self.parse_expression()?;

            if self.next_if_kind(&[TokenKind::RParen]).is_none() {
                return Err(ParseError::UnterminatedGroup { line: open.line });
            }

            return Ok(Expr::group(inner));
        }

        match self.peek() {
            Some(token) if token.kind.is_literal() => self.parse_literal(),
            Some(token) if token.kind != TokenKind::Eof => {
                self.record(ParseError::ExpectedExpression { found: format!("'{}'", token.lexeme),
                                                             line:  token.line, });
                Ok(Expr::literal(Literal::Null))
            },
            _ => {
                self.record(ParseError::ExpectedExpression { found: "end of input".to_string(),
                                                             line:  self.last_line(), });
                Ok(Expr::literal(Literal::Null))
            },
        }
    }

    /// Consumes a literal token and converts its lexeme into a typed value.
    ///
    /// An integer that does not fit in an `i64` is recorded as
    /// [`ParseError::LiteralTooLarge`] and replaced by `null`.
    ///
    /// # Errors
    /// [`ParseError::MalformedLiteral`] when the token is not a literal kind
    /// or its lexeme does not parse as that kind.
    ///
    /// # Example
    /// ```
    /// use fredlang::{
    ///     ast::{Expr, Literal},
    ///     interpreter::{
    ///         parser::core::Parser,
    ///         token::{Token, TokenKind},
    ///     },
    /// };
    ///
    /// let tokens = [Token::new(TokenKind::Float, "15.5", 1)];
    /// let literal = Parser::new(&tokens).parse_literal().unwrap();
    ///
    /// assert_eq!(literal, Expr::literal(Literal::Float(15.5)));
    /// ```
    pub fn parse_literal(&mut self) -> ParseResult<Expr> {
        let Some(token) = self.advance() else {
            self.record(ParseError::ExpectedExpression { found: "end of input".to_string(),
                                                         line:  self.last_line(), });
            return Ok(Expr::literal(Literal::Null));
        };

        let malformed = || ParseError::MalformedLiteral { kind:   token.kind,
                                                          lexeme: token.lexeme.clone(),
                                                          line:   token.line, };

        let literal = match token.kind {
            TokenKind::String => Literal::String(token.lexeme.clone()),
            TokenKind::Integer => match token.lexeme.parse::<i64>() {
                Ok(n) => Literal::Integer(n),
                Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                    self.record(ParseError::LiteralTooLarge { lexeme: token.lexeme.clone(),
                                                              line:   token.line, });
                    Literal::Null
                },
                Err(_) => return Err(malformed()),
            },
            TokenKind::Float => Literal::Float(token.lexeme.parse().map_err(|_| malformed())?),
            TokenKind::True | TokenKind::False => {
                let value: bool = token.lexeme.parse().map_err(|_| malformed())?;
                if value != (token.kind == TokenKind::True) {
                    return Err(malformed());
                }
                Literal::Bool(value)
            },
            TokenKind::Null => Literal::Null,
            _ => return Err(malformed()),
        };

        Ok(Expr::literal(literal))
    }
}
