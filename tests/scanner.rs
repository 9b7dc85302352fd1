use fredlang::{
    error::ScanError,
    interpreter::{
        lexer::scan,
        token::{Token, TokenKind},
    },
};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn fixed_lexemes_round_trip() {
    for kind in TokenKind::FIXED {
        let lexeme = kind.lexeme()
                         .unwrap_or_else(|| panic!("{kind:?} should have a lexeme"));
        assert_eq!(TokenKind::from_lexeme(lexeme), Some(kind));
    }

    for kind in [TokenKind::String,
                 TokenKind::Integer,
                 TokenKind::Float,
                 TokenKind::Identifier,
                 TokenKind::Eof]
    {
        assert_eq!(kind.lexeme(), None);
    }

    assert_eq!(TokenKind::from_lexeme(""), None);
    assert_eq!(TokenKind::from_lexeme("String"), None);
}

#[test]
fn single_char_dispatch_matches_lexemes() {
    for kind in TokenKind::FIXED {
        if let Some(c) = kind.single_char() {
            assert_eq!(TokenKind::from_char(c), Some(kind));
        }
    }

    assert_eq!(TokenKind::BangEq.single_char(), None);
    assert_eq!(TokenKind::If.single_char(), None);
}

#[test]
fn punctuation_and_operators_across_lines() {
    let (tokens, errors) = scan("()   {   },.-+;/*!!= ==\n   =<<=>>=  \n\"Hello world\"");
    assert!(errors.is_empty(), "{errors:?}");

    use TokenKind::*;
    let line_one = [LParen, RParen, LBrace, RBrace, Comma, Dot, Minus, Plus, Semicolon, Slash,
                    Star, Bang, BangEq, DoubleEq];
    let line_two = [Eq, Less, LessEq, Greater, GreaterEq];

    let mut expected: Vec<Token> = line_one.iter().map(|k| Token::fixed(*k, 1)).collect();
    expected.extend(line_two.iter().map(|k| Token::fixed(*k, 2)));
    expected.push(Token::new(String, "Hello world", 3));
    expected.push(Token::fixed(Eof, 4));

    assert_eq!(tokens, expected);
}

#[test]
fn numbers_and_leading_dot() {
    let (tokens, errors) = scan("1234 12.25 .9");
    assert!(errors.is_empty());
    assert_eq!(tokens,
               vec![Token::new(TokenKind::Integer, "1234", 1),
                    Token::new(TokenKind::Float, "12.25", 1),
                    Token::fixed(TokenKind::Dot, 1),
                    Token::new(TokenKind::Integer, "9", 1),
                    Token::fixed(TokenKind::Eof, 2)]);
}

#[test]
fn trailing_dot_is_a_separate_token() {
    let (tokens, _) = scan("12.");
    assert_eq!(kinds(&tokens),
               vec![TokenKind::Integer, TokenKind::Dot, TokenKind::Eof]);
}

#[test]
fn keywords_and_identifiers() {
    let (tokens, errors) = scan("var answer = true and null_ish or whilst");
    assert!(errors.is_empty());
    assert_eq!(kinds(&tokens),
               vec![TokenKind::Var,
                    TokenKind::Identifier,
                    TokenKind::Eq,
                    TokenKind::True,
                    TokenKind::And,
                    TokenKind::Identifier,
                    TokenKind::Or,
                    TokenKind::Identifier,
                    TokenKind::Eof]);
    assert_eq!(tokens[1].lexeme, "answer");
    assert_eq!(tokens[5].lexeme, "null_ish");
}

#[test]
fn unicode_letters_form_identifiers() {
    let (tokens, errors) = scan("größe2 + λ");
    assert!(errors.is_empty());
    assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "größe2", 1));
    assert_eq!(tokens[2], Token::new(TokenKind::Identifier, "λ", 1));
}

#[test]
fn eof_sits_one_line_past_the_last() {
    for (source, line) in [("", 2), ("1", 2), ("1\n", 3), ("1\n2\n3\n", 5), ("\n\n", 4)] {
        let (tokens, _) = scan(source);
        let eofs: Vec<&Token> = tokens.iter().filter(|t| t.kind == TokenKind::Eof).collect();
        assert_eq!(eofs.len(), 1, "source {source:?}");
        assert_eq!(tokens.last(), Some(&Token::fixed(TokenKind::Eof, line)), "source {source:?}");
    }
}

#[test]
fn unterminated_string_is_dropped() {
    let (tokens, errors) = scan("1 \"abc");
    assert_eq!(errors, vec![ScanError::UnterminatedString { line: 1 }]);
    assert_eq!(kinds(&tokens), vec![TokenKind::Integer, TokenKind::Eof]);
    assert_eq!(errors[0].to_string(), "Error on line 1: unterminated string.");
}

#[test]
fn newlines_inside_strings_do_not_count() {
    let (tokens, errors) = scan("\"a\nb\"\n1");
    assert!(errors.is_empty());
    assert_eq!(tokens,
               vec![Token::new(TokenKind::String, "a\nb", 1),
                    Token::new(TokenKind::Integer, "1", 2),
                    Token::fixed(TokenKind::Eof, 3)]);

    let (tokens, errors) = scan("1\n\"open\n\n");
    assert_eq!(errors.iter().map(ScanError::line).collect::<Vec<_>>(), vec![2]);
    assert_eq!(tokens.last(), Some(&Token::fixed(TokenKind::Eof, 3)));
}

#[test]
fn unexpected_characters_are_skipped() {
    let (tokens, errors) = scan("1 @ 2\n# €");
    assert_eq!(errors,
               vec![ScanError::UnexpectedCharacter { character: '@',
                                                     line:      1, },
                    ScanError::UnexpectedCharacter { character: '#',
                                                     line:      2, },
                    ScanError::UnexpectedCharacter { character: '€',
                                                     line:      2, }]);
    assert_eq!(kinds(&tokens),
               vec![TokenKind::Integer, TokenKind::Integer, TokenKind::Eof]);
    assert_eq!(errors[0].to_string(), "Error on line 1: Unexpected token '@'.");
    assert_eq!(errors.iter().map(ScanError::line).collect::<Vec<_>>(), vec![1, 2, 2]);
}

#[test]
fn token_display() {
    let token = Token::new(TokenKind::Float, "2.5", 7);
    assert_eq!(token.to_string(), "Float '2.5' (line 7)");
    assert_eq!(TokenKind::GreaterEq.to_string(), ">=");
    assert_eq!(TokenKind::Identifier.to_string(), "Identifier");
}
