#![cfg(test)]

use crate::lexer::{
    token::{Token, TokenKind},
    tokenizer::Tokenizer,
};

#[test]
pub fn integer() {
    let text = r#"123234"#.to_owned();

    let tokens = Tokenizer::string_to_tokens(text);

    assert_eq!(tokens, vec![Token::new(TokenKind::Integer, "123234")]);
}

#[test]
pub fn integer_then_semicolon() {
    let text = r#"42;"#.to_owned();

    let tokens = Tokenizer::string_to_tokens(text);

    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Integer, "42"),
            Token::new(TokenKind::Semicolon, ";"),
        ]
    );
}

// 소문자 한 글자는 변수, 그 밖의 이름은 식별자입니다.
#[test]
pub fn var_versus_identifier() {
    let text = r#"x xs X _x x2"#.to_owned();

    let tokens = Tokenizer::string_to_tokens(text);

    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Var, "x"),
            Token::new(TokenKind::Identifier, "xs"),
            Token::new(TokenKind::Var, "X"),
            Token::new(TokenKind::Identifier, "_x"),
            Token::new(TokenKind::Identifier, "x2"),
        ]
    );
}

#[test]
pub fn keywords_ignore_case() {
    let text = r#"if Else WHILE Return"#.to_owned();

    let tokens = Tokenizer::string_to_tokens(text);

    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::If, "if"),
            Token::new(TokenKind::Else, "Else"),
            Token::new(TokenKind::While, "WHILE"),
            Token::new(TokenKind::Return, "Return"),
        ]
    );
}

#[test]
pub fn identifier_with_digits() {
    let text = r#"turret9 { }"#.to_owned();

    let tokens = Tokenizer::string_to_tokens(text);

    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Identifier, "turret9"),
            Token::new(TokenKind::LBrace, "{"),
            Token::new(TokenKind::RBrace, "}"),
        ]
    );
}

#[test]
pub fn identifier_at_eof() {
    let text = r#"main"#.to_owned();

    let tokens = Tokenizer::string_to_tokens(text);

    assert_eq!(tokens, vec![Token::new(TokenKind::Identifier, "main")]);
}

#[test]
pub fn integer_splits_identifier() {
    let text = r#"9lives"#.to_owned();

    let tokens = Tokenizer::string_to_tokens(text);

    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Integer, "9"),
            Token::new(TokenKind::Identifier, "lives"),
        ]
    );
}
