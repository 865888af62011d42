#![cfg(test)]

use crate::lexer::tokenizer::Tokenizer;

fn positions(text: &str) -> Vec<(String, usize, usize)> {
    let mut tokenizer = Tokenizer::new(text.to_owned());

    let mut positions = vec![];
    while let Some(token) = tokenizer.token() {
        positions.push((token.lexeme, tokenizer.line(), tokenizer.column()));
    }

    positions
}

#[test]
pub fn token_positions() {
    let text = "main {\n  a = 12;\n}";

    assert_eq!(
        positions(text),
        vec![
            ("main".to_owned(), 1, 1),
            ("{".to_owned(), 1, 6),
            ("a".to_owned(), 2, 3),
            ("=".to_owned(), 2, 5),
            ("12".to_owned(), 2, 7),
            (";".to_owned(), 2, 9),
            ("}".to_owned(), 3, 1),
        ]
    );
}

// \r\n과 \r은 읽기 전에 \n으로 접힙니다.
#[test]
pub fn carriage_returns_are_folded() {
    let text = "a = 1;\r\nb = 2;\rc = 3;";

    assert_eq!(
        positions(text),
        vec![
            ("a".to_owned(), 1, 1),
            ("=".to_owned(), 1, 3),
            ("1".to_owned(), 1, 5),
            (";".to_owned(), 1, 6),
            ("b".to_owned(), 2, 1),
            ("=".to_owned(), 2, 3),
            ("2".to_owned(), 2, 5),
            (";".to_owned(), 2, 6),
            ("c".to_owned(), 3, 1),
            ("=".to_owned(), 3, 3),
            ("3".to_owned(), 3, 5),
            (";".to_owned(), 3, 6),
        ]
    );
}

// 연속한 토큰의 (행, 열)은 사전순으로 늘어나기만 해야 합니다.
#[test]
pub fn positions_are_monotonic() {
    let text = "init { a = 0; }\nmain {\n  if (a > 1) { fire(1); }\n  return;\n}";

    let positions = positions(text);
    for pair in positions.windows(2) {
        assert!(pair[0].1 < pair[1].1 || (pair[0].1 == pair[1].1 && pair[0].2 < pair[1].2));
    }
}

#[test]
pub fn multichar_token_reports_start_column() {
    let text = "  a >= 10;";

    assert_eq!(
        positions(text),
        vec![
            ("a".to_owned(), 1, 3),
            (">=".to_owned(), 1, 5),
            ("10".to_owned(), 1, 8),
            (";".to_owned(), 1, 10),
        ]
    );
}
