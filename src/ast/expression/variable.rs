/// 한 글자짜리 변수 참조입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpression {
    pub name: char,
}
