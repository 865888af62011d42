#![cfg(test)]

use crate::{
    codegen::word::Word, compiler::Compiler, error::all_error::AllError, version::Version,
};

fn compile_error(text: &str) -> (Compiler, AllError) {
    let mut compiler = Compiler::new(text.to_owned());
    let error = compiler
        .compile(Version::V2_0_0)
        .expect_err("compilation should fail");

    (compiler, error)
}

#[test]
pub fn missing_main() {
    let (_, error) = compile_error("foo { return; }");

    assert_eq!(
        error,
        AllError::CodegenError("Unable to find 'main' procedure".to_owned())
    );
}

#[test]
pub fn duplicate_procedure() {
    let (_, error) = compile_error("main { } foo { } foo { }");

    assert_eq!(
        error,
        AllError::CodegenError("Procedure foo defined more than once".to_owned())
    );
}

// 프로시저 이름 비교는 대소문자를 가리지 않습니다.
#[test]
pub fn duplicate_differs_only_in_case() {
    let (_, error) = compile_error("main { } Foo { } FOO { }");

    assert!(matches!(error, AllError::CodegenError(message) if message.contains("more than once")));
}

#[test]
pub fn undefined_callee() {
    let (_, error) = compile_error("main { bar(); }");

    assert_eq!(
        error,
        AllError::CodegenError("Call to undefined procedure 'bar'".to_owned())
    );
}

#[test]
pub fn builtin_argument_count_mismatch() {
    let (_, error) = compile_error("main { fire(1, 2); }");

    assert_eq!(
        error,
        AllError::CodegenError(
            "Expected 1 parameters for fire. Instead, got 2 on 1,8".to_owned()
        )
    );
}

// 순수 프로시저 내장은 읽기 형태가 없어서 인자를 줄여도 오류입니다.
#[test]
pub fn builtin_procedure_requires_its_argument() {
    let (_, error) = compile_error("main { fire(); }");

    assert!(matches!(error, AllError::CodegenError(message) if message.contains("Expected 1")));
}

#[test]
pub fn function_argument_count_mismatch() {
    let (_, error) = compile_error("main { a = arctan(1); }");

    assert!(matches!(error, AllError::CodegenError(message) if message.contains("Expected 2")));
}

// 사용자 프로시저는 매개변수가 없으므로 인자가 오면 오류입니다.
#[test]
pub fn user_call_with_arguments() {
    let (_, error) = compile_error("main { helper(1); } helper { }");

    assert!(matches!(error, AllError::CodegenError(message) if message.contains("Expected 0")));
}

// 실패한 뒤에도 부분 출력과 심볼 테이블이 남아 있어야 합니다.
#[test]
pub fn partial_output_survives_failure() {
    let (compiler, _) = compile_error("main { a = 1; } foo { bar(); }");

    assert!(compiler.symtab().contains_key("main"));
    assert!(compiler.symtab().contains_key("foo"));
    assert!(compiler
        .code()
        .iter()
        .any(|word| matches!(word, Word::UnresolvedCall(name) if name == "bar")));
}

#[test]
pub fn lex_garbage_surfaces_as_parse_error() {
    let mut compiler = Compiler::new("main { a = $; }".to_owned());
    let error = compiler.compile(Version::V2_0_0).expect_err("should fail");

    assert!(matches!(error, AllError::ParserError(_)));
}
