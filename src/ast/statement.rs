use self::{assign::AssignStatement, branch::IfStatement, repeat::WhileStatement};

use super::expression::call::CallExpression;

pub mod assign;
pub mod branch;
pub mod repeat;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assign(AssignStatement),
    Call(CallExpression),
    If(IfStatement),
    While(WhileStatement),
    Return,
}

impl From<AssignStatement> for Statement {
    fn from(statement: AssignStatement) -> Self {
        Statement::Assign(statement)
    }
}

impl From<CallExpression> for Statement {
    fn from(call: CallExpression) -> Self {
        Statement::Call(call)
    }
}

impl From<IfStatement> for Statement {
    fn from(statement: IfStatement) -> Self {
        Statement::If(statement)
    }
}

impl From<WhileStatement> for Statement {
    fn from(statement: WhileStatement) -> Self {
        Statement::While(statement)
    }
}
