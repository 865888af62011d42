use self::{
    binary::BinaryExpression, call::CallExpression, integer::IntegerExpression,
    unary::UnaryExpression, variable::VariableExpression,
};

pub mod binary;
pub mod call;
pub mod integer;
pub mod unary;
pub mod variable;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Integer(IntegerExpression),
    Variable(VariableExpression),
    Call(CallExpression),
}

impl From<BinaryExpression> for Expression {
    fn from(binary: BinaryExpression) -> Self {
        Expression::Binary(binary)
    }
}

impl From<UnaryExpression> for Expression {
    fn from(unary: UnaryExpression) -> Self {
        Expression::Unary(unary)
    }
}

impl From<IntegerExpression> for Expression {
    fn from(integer: IntegerExpression) -> Self {
        Expression::Integer(integer)
    }
}

impl From<VariableExpression> for Expression {
    fn from(variable: VariableExpression) -> Self {
        Expression::Variable(variable)
    }
}

impl From<CallExpression> for Expression {
    fn from(call: CallExpression) -> Self {
        Expression::Call(call)
    }
}

#[allow(dead_code)]
impl Expression {
    pub fn is_integer(&self) -> bool {
        match self {
            Expression::Integer(_) => true,
            _ => false,
        }
    }

    pub fn is_binary(&self) -> bool {
        match self {
            Expression::Binary(_) => true,
            _ => false,
        }
    }
}
