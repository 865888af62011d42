pub(crate) mod expression;
pub(crate) mod statement;


use crate::{
    ast::program::{Procedure, Program},
    error::all_error::AllError,
    lexer::{
        token::{Token, TokenKind},
        tokenizer::Tokenizer,
    },
};

/// 토큰 한 개를 미리 읽어두는 하향식 파서입니다.
/// 토큰은 Tokenizer에서 끌어오는 즉시 소비하고, 목록으로 쌓아두지 않습니다.
#[derive(Debug)]
pub struct Parser {
    tokenizer: Tokenizer,
    token: Option<Token>,
    last_lexeme: Option<String>,
    last_line: usize,
    last_column: usize,
}

impl Parser {
    pub fn new(source: String) -> Self {
        Self {
            tokenizer: Tokenizer::new(source),
            token: None,
            last_lexeme: None,
            last_line: 1,
            last_column: 1,
        }
    }

    pub fn reset(&mut self) {
        self.tokenizer.reset();
        self.token = None;
        self.last_lexeme = None;
        self.last_line = 1;
        self.last_column = 1;
    }

    pub fn parse(&mut self) -> Result<Program, AllError> {
        let mut procedures = vec![];

        self.token();
        while self.token.is_some() {
            procedures.push(self.procedure()?);
        }

        Ok(Program { procedures })
    }

    fn procedure(&mut self) -> Result<Procedure, AllError> {
        let name = self.expect(TokenKind::Identifier)?;
        let line = self.last_line;
        let column = self.last_column;

        if !self.token_is(TokenKind::LBrace) {
            return Err(self.parse_error(Some(TokenKind::LBrace)));
        }
        let statements = self.statement()?;

        Ok(Procedure {
            name,
            statements,
            line,
            column,
        })
    }

    // 현재 토큰을 소비하고 다음 토큰을 읽어둡니다. 주석 토큰은 건너뜁니다.
    fn token(&mut self) {
        self.last_lexeme = self.token.take().map(|token| token.lexeme);
        self.last_line = self.tokenizer.line();
        self.last_column = self.tokenizer.column();

        self.token = self.tokenizer.token();
        while self.token_is(TokenKind::Comment) {
            self.token = self.tokenizer.token();
        }
    }

    fn token_is(&self, kind: TokenKind) -> bool {
        match &self.token {
            Some(token) => token.kind == kind,
            None => false,
        }
    }

    fn accept(&mut self, kind: TokenKind) -> bool {
        if self.token_is(kind) {
            self.token();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<String, AllError> {
        if self.accept(kind) {
            Ok(self.last_lexeme.clone().unwrap_or_default())
        } else {
            Err(self.parse_error(Some(kind)))
        }
    }

    // 방금 소비한 VAR 토큰의 글자를 돌려줍니다.
    fn last_variable(&self) -> Result<char, AllError> {
        self.last_lexeme
            .as_ref()
            .and_then(|lexeme| lexeme.chars().next())
            .ok_or_else(|| AllError::ParserError("Expected a variable name".to_owned()))
    }

    fn parse_error(&self, expected: Option<TokenKind>) -> AllError {
        let lexeme = match &self.token {
            Some(token) => token.lexeme.clone(),
            None => "EOF".to_owned(),
        };
        let line = self.tokenizer.line();
        let column = self.tokenizer.column();

        match expected {
            Some(expected) => AllError::ParserError(format!(
                "Expected {:?} on {},{}. Instead, got {}",
                expected, line, column, lexeme
            )),
            None => AllError::ParserError(format!(
                "Unexpected symbol -> {} on {},{}",
                lexeme, line, column
            )),
        }
    }
}
