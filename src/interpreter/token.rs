use std::collections::HashMap;

use lazy_static::lazy_static;

/// The closed set of lexical categories a [`Token`] can belong to.
///
/// Kinds come in two families:
/// - fixed-lexeme kinds (punctuation, operators and reserved keywords), each of
///   which has exactly one canonical lexeme;
/// - variable-lexeme kinds (`String`, `Integer`, `Float`, `Identifier`,
///   `Eof`), whose lexeme is whatever text was scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,
    /// `!`
    Bang,
    /// `!=`
    BangEq,
    /// `=`
    Eq,
    /// `==`
    DoubleEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,
    /// `<`
    Less,
    /// `<=`
    LessEq,

    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `function`
    Function,
    /// `for`
    For,
    /// `if`
    If,
    /// `null`
    Null,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    /// String literal; the lexeme is the text between the quotes.
    String,
    /// Integer literal such as `1234`.
    Integer,
    /// Floating-point literal such as `12.25`.
    Float,
    /// A name that is not a reserved keyword.
    Identifier,
    /// End of input. Always the last token, with an empty lexeme.
    Eof,
}

lazy_static! {
    static ref KIND_BY_LEXEME: HashMap<&'static str, TokenKind> =
        TokenKind::FIXED.iter()
                        .filter_map(|kind| kind.lexeme().map(|lexeme| (lexeme, *kind)))
                        .collect();
}

impl TokenKind {
    /// Every kind with a fixed lexeme, punctuation first, then keywords.
    pub const FIXED: [Self; 35] = [Self::LParen,
                                   Self::RParen,
                                   Self::LBrace,
                                   Self::RBrace,
                                   Self::Comma,
                                   Self::Dot,
                                   Self::Minus,
                                   Self::Plus,
                                   Self::Semicolon,
                                   Self::Slash,
                                   Self::Star,
                                   Self::Bang,
                                   Self::BangEq,
                                   Self::Eq,
                                   Self::DoubleEq,
                                   Self::Greater,
                                   Self::GreaterEq,
                                   Self::Less,
                                   Self::LessEq,
                                   Self::And,
                                   Self::Class,
                                   Self::Else,
                                   Self::False,
                                   Self::Function,
                                   Self::For,
                                   Self::If,
                                   Self::Null,
                                   Self::Or,
                                   Self::Print,
                                   Self::Return,
                                   Self::Super,
                                   Self::This,
                                   Self::True,
                                   Self::Var,
                                   Self::While];

    /// Returns the canonical lexeme of a fixed-lexeme kind.
    ///
    /// Variable-lexeme kinds (`String`, `Integer`, `Float`, `Identifier`,
    /// `Eof`) have no canonical text and yield `None`.
    ///
    /// # Example
    /// ```
    /// use fredlang::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::GreaterEq.lexeme(), Some(">="));
    /// assert_eq!(TokenKind::Function.lexeme(), Some("function"));
    /// assert_eq!(TokenKind::Identifier.lexeme(), None);
    /// ```
    #[must_use]
    pub const fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Minus => "-",
            Self::Plus => "+",
            Self::Semicolon => ";",
            Self::Slash => "/",
            Self::Star => "*",
            Self::Bang => "!",
            Self::BangEq => "!=",
            Self::Eq => "=",
            Self::DoubleEq => "==",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::And => "and",
            Self::Class => "class",
            Self::Else => "else",
            Self::False => "false",
            Self::Function => "function",
            Self::For => "for",
            Self::If => "if",
            Self::Null => "null",
            Self::Or => "or",
            Self::Print => "print",
            Self::Return => "return",
            Self::Super => "super",
            Self::This => "this",
            Self::True => "true",
            Self::Var => "var",
            Self::While => "while",
            Self::String | Self::Integer | Self::Float | Self::Identifier | Self::Eof => {
                return None;
            },
        })
    }

    /// Looks up the fixed-lexeme kind whose canonical lexeme is `lexeme`.
    ///
    /// Unknown text yields `None`; there is no fallback kind.
    ///
    /// # Example
    /// ```
    /// use fredlang::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_lexeme("while"), Some(TokenKind::While));
    /// assert_eq!(TokenKind::from_lexeme("=="), Some(TokenKind::DoubleEq));
    /// assert_eq!(TokenKind::from_lexeme("whilst"), None);
    /// ```
    #[must_use]
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        KIND_BY_LEXEME.get(lexeme).copied()
    }

    /// Returns the character of a kind whose lexeme is exactly one character.
    #[must_use]
    pub fn single_char(self) -> Option<char> {
        let mut chars = self.lexeme()?.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// Inverse of [`TokenKind::single_char`].
    ///
    /// # Example
    /// ```
    /// use fredlang::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_char(';'), Some(TokenKind::Semicolon));
    /// assert_eq!(TokenKind::from_char('@'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        Self::FIXED.into_iter()
                   .find(|kind| kind.single_char() == Some(c))
    }

    /// Whether the kind is a reserved word rather than punctuation.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self,
                 Self::And
                 | Self::Class
                 | Self::Else
                 | Self::False
                 | Self::Function
                 | Self::For
                 | Self::If
                 | Self::Null
                 | Self::Or
                 | Self::Print
                 | Self::Return
                 | Self::Super
                 | Self::This
                 | Self::True
                 | Self::Var
                 | Self::While)
    }

    /// Whether a token of this kind can stand on its own as a literal value.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(self,
                 Self::String | Self::Integer | Self::Float | Self::True | Self::False | Self::Null)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.lexeme() {
            Some(lexeme) => write!(f, "{lexeme}"),
            None => write!(f, "{self:?}"),
        }
    }
}

/// A scanned token: its category, the text it was scanned from and the line
/// its first character sits on.
///
/// Tokens are produced once by the scanner and never modified afterwards.
/// Two tokens are equal when all three fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Lexical category.
    pub kind:   TokenKind,
    /// Source text of the token (string literals without their quotes).
    pub lexeme: String,
    /// 1-based source line.
    pub line:   usize,
}

impl Token {
    /// Builds a token from its parts.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               line }
    }

    /// Builds a fixed-lexeme token, filling in the canonical lexeme.
    ///
    /// Variable-lexeme kinds get an empty lexeme, which is what `Eof`
    /// expects.
    ///
    /// # Example
    /// ```
    /// use fredlang::interpreter::token::{Token, TokenKind};
    ///
    /// let token = Token::fixed(TokenKind::LessEq, 3);
    /// assert_eq!(token, Token::new(TokenKind::LessEq, "<=", 3));
    /// ```
    #[must_use]
    pub fn fixed(kind: TokenKind, line: usize) -> Self {
        Self::new(kind, kind.lexeme().unwrap_or_default(), line)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} '{}' (line {})", self.kind, self.lexeme, self.line)
    }
}
