/// 10진 리터럴 텍스트를 그대로 보관합니다. 숫자값 변환은 코드 생성 단계에서 합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpression {
    pub lexeme: String,
}
