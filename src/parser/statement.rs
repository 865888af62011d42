use crate::{
    ast::{
        expression::call::CallExpression,
        statement::{
            assign::AssignStatement,
            branch::{ElseIf, IfStatement},
            repeat::WhileStatement,
            Statement,
        },
    },
    error::all_error::AllError,
    lexer::token::TokenKind,
};

use super::Parser;

impl Parser {
    // 문장 하나를 파싱합니다. 중괄호 블록은 안쪽 문장 목록으로 평탄화되기
    // 때문에 반환값은 항상 목록입니다.
    pub(super) fn statement(&mut self) -> Result<Vec<Statement>, AllError> {
        if self.accept(TokenKind::LBrace) {
            let mut statements = vec![];
            while !self.token_is(TokenKind::RBrace) {
                statements.extend(self.statement()?);
            }
            self.expect(TokenKind::RBrace)?;

            return Ok(statements);
        }

        if self.accept(TokenKind::Var) {
            let variable = self.last_variable()?;
            self.expect(TokenKind::Assign)?;
            let value = self.logical_expr()?;
            self.expect(TokenKind::Semicolon)?;

            return Ok(vec![AssignStatement { variable, value }.into()]);
        }

        if self.accept(TokenKind::Identifier) {
            let name = self.last_lexeme.clone().unwrap_or_default();
            let line = self.last_line;
            let column = self.last_column;

            let mut arguments = vec![];
            if self.accept(TokenKind::LParen) {
                if !self.token_is(TokenKind::RParen) {
                    arguments.push(self.logical_expr()?);
                    while self.accept(TokenKind::Comma) {
                        arguments.push(self.logical_expr()?);
                    }
                }
                self.expect(TokenKind::RParen)?;
            }
            self.expect(TokenKind::Semicolon)?;

            return Ok(vec![CallExpression {
                name,
                arguments,
                line,
                column,
            }
            .into()]);
        }

        if self.accept(TokenKind::If) {
            return self.if_statement();
        }

        if self.accept(TokenKind::While) {
            self.expect(TokenKind::LParen)?;
            let condition = self.logical_expr()?;
            self.expect(TokenKind::RParen)?;
            let body = self.statement()?;

            return Ok(vec![WhileStatement { condition, body }.into()]);
        }

        if self.accept(TokenKind::Return) {
            self.expect(TokenKind::Semicolon)?;

            return Ok(vec![Statement::Return]);
        }

        Err(self.parse_error(None))
    }

    // else if 팔들은 IfStatement 한 개에 차례로 매달리고,
    // 단순 else 블록이 나오면 사슬이 끝납니다.
    fn if_statement(&mut self) -> Result<Vec<Statement>, AllError> {
        self.expect(TokenKind::LParen)?;
        let condition = self.logical_expr()?;
        self.expect(TokenKind::RParen)?;
        let body = self.statement()?;

        let mut else_ifs = vec![];
        let mut else_body = None;

        while self.accept(TokenKind::Else) {
            if self.accept(TokenKind::If) {
                self.expect(TokenKind::LParen)?;
                let condition = self.logical_expr()?;
                self.expect(TokenKind::RParen)?;
                let body = self.statement()?;

                else_ifs.push(ElseIf { condition, body });
            } else {
                else_body = Some(self.statement()?);
                break;
            }
        }

        Ok(vec![IfStatement {
            condition,
            body,
            else_ifs,
            else_body,
        }
        .into()])
    }
}
