use log::{debug, trace};
use logos::Logos;

use crate::{
    error::ScanError,
    interpreter::token::{Token, TokenKind},
};

/// Raw lexical categories recognised by maximal munch.
///
/// This layer only decides where a lexeme starts and ends. Turning a lexeme
/// into a [`TokenKind`] (keywords, operators) goes through the token tables.
/// Whitespace is skipped here; the scanner counts the newlines it contained
/// from the gaps between spans.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
enum Lexeme {
    /// `"..."`, may span lines without moving the line counter.
    #[regex(r#""[^"]*""#)]
    Text,
    /// A `"` with no closing quote before the end of input.
    #[regex(r#""[^"]*"#)]
    UnterminatedText,
    /// `1234`
    #[regex(r"[0-9]+")]
    Integer,
    /// `12.25`; a dot must be followed by a digit to belong to the number.
    #[regex(r"[0-9]+\.[0-9]+")]
    Float,
    /// Keywords and identifiers.
    #[regex(r"\p{L}[\p{L}\p{N}_]*")]
    Word,
    /// `!=`, `==`, `<=`, `>=`
    #[regex(r"[!=<>]=")]
    Pair,
    /// Any one-character operator or delimiter.
    #[regex(r"[(){},.+;/*!=<>-]")]
    Single,
}

/// Turns source text into a token sequence.
///
/// The scanner makes a single left-to-right pass. Lexical errors do not stop
/// it: the offending text is dropped, the error is recorded, and scanning
/// resumes right after it.
///
/// # Example
/// ```
/// use fredlang::interpreter::{
///     lexer::Scanner,
///     token::{Token, TokenKind},
/// };
///
/// let (tokens, errors) = Scanner::new("1 + 2.5").scan_tokens();
///
/// assert!(errors.is_empty());
/// assert_eq!(tokens,
///            vec![Token::new(TokenKind::Integer, "1", 1),
///                 Token::fixed(TokenKind::Plus, 1),
///                 Token::new(TokenKind::Float, "2.5", 1),
///                 Token::fixed(TokenKind::Eof, 2)]);
/// ```
pub struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
    line:   usize,
    cursor: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `source`, on line 1.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source,
               tokens: Vec::new(),
               errors: Vec::new(),
               line: 1,
               cursor: 0 }
    }

    /// Scans the whole source.
    ///
    /// # Returns
    /// Every token that was recognised, in source order and terminated by a
    /// single `Eof` token, together with every lexical error in source order.
    /// The `Eof` token sits one line past the last line counted.
    #[must_use]
    pub fn scan_tokens(mut self) -> (Vec<Token>, Vec<ScanError>) {
        let mut lexer = Lexeme::lexer(self.source);

        while let Some(result) = lexer.next() {
            let span = lexer.span();
            self.count_newlines(span.start);

            match result {
                Ok(lexeme) => {
                    self.push_lexeme(lexeme, lexer.slice());
                    if matches!(lexeme, Lexeme::Text | Lexeme::UnterminatedText) {
                        // Newlines inside a string do not advance the line.
                        self.cursor = span.end;
                    }
                },
                Err(()) => {
                    let character = self.source[span.start..].chars()
                                                             .next()
                                                             .unwrap_or(char::REPLACEMENT_CHARACTER);

                    // Skip the whole code point, never part of it.
                    let remaining = (span.start + character.len_utf8()).saturating_sub(span.end);
                    if remaining > 0 {
                        lexer.bump(remaining);
                    }

                    self.error(ScanError::UnexpectedCharacter { character,
                                                                line: self.line });
                },
            }

            self.count_newlines(lexer.span().end);
        }

        self.count_newlines(self.source.len());
        self.line += 1;
        self.tokens.push(Token::fixed(TokenKind::Eof, self.line));

        trace!("scanned {} tokens with {} errors over {} lines",
               self.tokens.len(),
               self.errors.len(),
               self.line);

        (self.tokens, self.errors)
    }

    /// Classifies a raw lexeme and appends the resulting token.
    fn push_lexeme(&mut self, lexeme: Lexeme, slice: &str) {
        let kind = match lexeme {
            Lexeme::Text => {
                let text = &slice[1..slice.len() - 1];
                self.tokens.push(Token::new(TokenKind::String, text, self.line));
                return;
            },
            Lexeme::UnterminatedText => {
                self.error(ScanError::UnterminatedString { line: self.line });
                return;
            },
            Lexeme::Integer => TokenKind::Integer,
            Lexeme::Float => TokenKind::Float,
            Lexeme::Word => TokenKind::from_lexeme(slice).filter(|kind| kind.is_keyword())
                                                         .unwrap_or(TokenKind::Identifier),
            Lexeme::Pair => match TokenKind::from_lexeme(slice) {
                Some(kind) => kind,
                None => return self.unexpected(slice),
            },
            Lexeme::Single => match slice.chars().next().and_then(TokenKind::from_char) {
                Some(kind) => kind,
                None => return self.unexpected(slice),
            },
        };

        self.tokens.push(Token::new(kind, slice, self.line));
    }

    fn unexpected(&mut self, slice: &str) {
        for character in slice.chars() {
            self.error(ScanError::UnexpectedCharacter { character,
                                                        line: self.line });
        }
    }

    fn error(&mut self, error: ScanError) {
        debug!("{error}");
        self.errors.push(error);
    }

    /// Advances the line counter over the source between the cursor and
    /// `until`, then moves the cursor there.
    fn count_newlines(&mut self, until: usize) {
        if until > self.cursor {
            self.line += self.source[self.cursor..until].matches('\n').count();
            self.cursor = until;
        }
    }
}

/// Scans `source` in one call.
///
/// Shorthand for `Scanner::new(source).scan_tokens()`.
#[must_use]
pub fn scan(source: &str) -> (Vec<Token>, Vec<ScanError>) {
    Scanner::new(source).scan_tokens()
}
