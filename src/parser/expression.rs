use crate::{
    ast::{
        expression::{
            binary::BinaryExpression, call::CallExpression, integer::IntegerExpression,
            unary::UnaryExpression, variable::VariableExpression, Expression,
        },
        operator::{binary::BinaryOperator, unary::UnaryOperator},
    },
    error::all_error::AllError,
    lexer::token::TokenKind,
};

use super::Parser;

impl Parser {
    // &, |, ^는 같은 우선순위의 좌결합으로 처리합니다.
    pub(super) fn logical_expr(&mut self) -> Result<Expression, AllError> {
        let mut node = self.comparative_expr()?;

        loop {
            let operator = if self.accept(TokenKind::And) {
                BinaryOperator::And
            } else if self.accept(TokenKind::Or) {
                BinaryOperator::Or
            } else if self.accept(TokenKind::Xor) {
                BinaryOperator::Xor
            } else {
                break;
            };

            let rhs = self.comparative_expr()?;
            node = BinaryExpression {
                operator,
                lhs: Box::new(node),
                rhs: Box::new(rhs),
            }
            .into();
        }

        Ok(node)
    }

    // 비교 연산자는 비결합입니다. 연달아 쓰려면 괄호가 필요합니다.
    fn comparative_expr(&mut self) -> Result<Expression, AllError> {
        let node = self.arithmetic_expr()?;

        let operator = if self.accept(TokenKind::Equal) {
            Some(BinaryOperator::Equal)
        } else if self.accept(TokenKind::NotEqual) {
            Some(BinaryOperator::NotEqual)
        } else if self.accept(TokenKind::Gt) {
            Some(BinaryOperator::GreaterThan)
        } else if self.accept(TokenKind::GtEqual) {
            Some(BinaryOperator::GreaterThanOrEqual)
        } else if self.accept(TokenKind::Lt) {
            Some(BinaryOperator::LessThan)
        } else if self.accept(TokenKind::LtEqual) {
            Some(BinaryOperator::LessThanOrEqual)
        } else {
            None
        };

        match operator {
            Some(operator) => {
                let rhs = self.arithmetic_expr()?;
                Ok(BinaryExpression {
                    operator,
                    lhs: Box::new(node),
                    rhs: Box::new(rhs),
                }
                .into())
            }
            None => Ok(node),
        }
    }

    // 선행 +는 흡수되고, 선행 -와 !는 단항 노드로 감쌉니다.
    fn arithmetic_expr(&mut self) -> Result<Expression, AllError> {
        let mut node = if self.accept(TokenKind::Plus) {
            self.term()?
        } else if self.accept(TokenKind::Minus) {
            let operand = self.term()?;
            UnaryExpression {
                operator: UnaryOperator::Negate,
                operand: Box::new(operand),
            }
            .into()
        } else if self.accept(TokenKind::Not) {
            let operand = self.term()?;
            UnaryExpression {
                operator: UnaryOperator::Not,
                operand: Box::new(operand),
            }
            .into()
        } else {
            self.term()?
        };

        loop {
            let operator = if self.accept(TokenKind::Plus) {
                BinaryOperator::Add
            } else if self.accept(TokenKind::Minus) {
                BinaryOperator::Subtract
            } else {
                break;
            };

            let rhs = self.term()?;
            node = BinaryExpression {
                operator,
                lhs: Box::new(node),
                rhs: Box::new(rhs),
            }
            .into();
        }

        Ok(node)
    }

    fn term(&mut self) -> Result<Expression, AllError> {
        let mut node = self.factor()?;

        loop {
            let operator = if self.accept(TokenKind::Multiply) {
                BinaryOperator::Multiply
            } else if self.accept(TokenKind::Divide) {
                BinaryOperator::Divide
            } else if self.accept(TokenKind::Modulo) {
                BinaryOperator::Modulo
            } else {
                break;
            };

            let rhs = self.factor()?;
            node = BinaryExpression {
                operator,
                lhs: Box::new(node),
                rhs: Box::new(rhs),
            }
            .into();
        }

        Ok(node)
    }

    fn factor(&mut self) -> Result<Expression, AllError> {
        if self.accept(TokenKind::Var) {
            let name = self.last_variable()?;

            return Ok(VariableExpression { name }.into());
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

            return Ok(CallExpression {
                name,
                arguments,
                line,
                column,
            }
            .into());
        }

        if self.accept(TokenKind::Integer) {
            let lexeme = self.last_lexeme.clone().unwrap_or_default();

            return Ok(IntegerExpression { lexeme }.into());
        }

        if self.accept(TokenKind::LParen) {
            let node = self.logical_expr()?;
            self.expect(TokenKind::RParen)?;

            return Ok(node);
        }

        Err(self.parse_error(None))
    }
}
