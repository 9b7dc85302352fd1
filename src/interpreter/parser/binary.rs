use crate::{
    ast::Expr,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

/// Operators of the equality level.
pub const EQUALITY_OPERATORS: [TokenKind; 2] = [TokenKind::DoubleEq, TokenKind::BangEq];
/// Operators of the comparison level.
pub const COMPARISON_OPERATORS: [TokenKind; 4] = [TokenKind::Greater,
                                                  TokenKind::GreaterEq,
                                                  TokenKind::Less,
                                                  TokenKind::LessEq];
/// Operators of the term level.
pub const TERM_OPERATORS: [TokenKind; 2] = [TokenKind::Plus, TokenKind::Minus];
/// Operators of the factor level.
pub const FACTOR_OPERATORS: [TokenKind; 2] = [TokenKind::Star, TokenKind::Slash];

impl Parser<'_> {
    /// Parses equality expressions.
    ///
    /// Grammar: `equality := comparison (("==" | "!=") comparison)*`
    pub fn parse_equality(&mut self) -> ParseResult<Expr> {
        self.fold_binary(&EQUALITY_OPERATORS, Self::parse_comparison)
    }

    /// Parses comparison expressions.
    ///
    /// Grammar: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
    pub fn parse_comparison(&mut self) -> ParseResult<Expr> {
        self.fold_binary(&COMPARISON_OPERATORS, Self::parse_term)
    }

    /// Parses addition and subtraction.
    ///
    /// Grammar: `term := factor (("+" | "-") factor)*`
    pub fn parse_term(&mut self) -> ParseResult<Expr> {
        self.fold_binary(&TERM_OPERATORS, Self::parse_factor)
    }

    /// Parses multiplication and division.
    ///
    /// Grammar: `factor := unary (("*" | "/") unary)*`
    pub fn parse_factor(&mut self) -> ParseResult<Expr> {
        self.fold_binary(&FACTOR_OPERATORS, Self::parse_unary)
    }

    /// Parses `operand (operator operand)*` and folds the chain to the left,
    /// so `a - b - c` becomes `((a - b) - c)`.
    fn fold_binary(&mut self,
                   operators: &[TokenKind],
                   operand: fn(&mut Self) -> ParseResult<Expr>)
                   -> ParseResult<Expr> {
        let mut left = operand(self)?;

        while let Some(operator) = self.next_if_kind(operators) {
            let right = operand(self)?;
            left = Expr::binary(left, operator.clone(), right);
        }

        Ok(left)
    }
}
