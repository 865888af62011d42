pub mod expression;
pub mod operator;
pub mod program;
pub mod statement;
