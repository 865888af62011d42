use crate::ast::operator::unary::UnaryOperator;

use super::Expression;

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
}
