#![cfg(test)]

use crate::{compiler::Compiler, opcodes::Opcode, version::Version};

const JMP: u16 = 0x7f5a;
const EOC: u16 = 0x7f5b;
const JIZ: u16 = 0x7f5e;
const ASS: u16 = 0x7f5f;
const ADD: u16 = 0x7f60;
const A: u16 = 0x7f95;
const B: u16 = 0x7f96;
const C: u16 = 0x7f97;
const FIRE: u16 = 0x7f89;
const XPOS: u16 = 0x7f87;
const ARCT: u16 = 0x7f7f;
const RDR: u16 = 0x7f84;
const AIM: u16 = 0x7f77;

fn compile(text: &str) -> Vec<u16> {
    let mut compiler = Compiler::new(text.to_owned());
    compiler.compile(Version::V2_0_0).unwrap()
}

#[test]
pub fn bare_return() {
    let code = compile("main { return; }");

    assert_eq!(code, vec![0, 3, JMP, JMP, EOC]);
}

#[test]
pub fn assignment_with_sum() {
    let code = compile("main { a = 1 + 2; return; }");

    assert_eq!(code, vec![0, 3, JMP, 1, 2, ADD, A, ASS, JMP, EOC]);
}

// 정수 리터럴의 단항 연산은 접히고 NEG 명령은 나오지 않습니다.
#[test]
pub fn negative_literal_folds() {
    let code = compile("main { a = -5; }");

    assert_eq!(code, vec![0, 3, JMP, (-5_i16) as u16, A, ASS, JMP, EOC]);
}

#[test]
pub fn bang_on_literals_folds() {
    let code = compile("main { a = !5; b = !0; }");

    assert_eq!(code, vec![0, 3, JMP, 0, A, ASS, 1, B, ASS, JMP, EOC]);
}

#[test]
pub fn negate_folds_through_parentheses() {
    let code = compile("main { a = -(5); }");

    assert_eq!(code, vec![0, 3, JMP, (-5_i16) as u16, A, ASS, JMP, EOC]);
}

// 쓰기 형태의 내장 호출은 [명령, 인자, ASS] 꼴입니다.
#[test]
pub fn builtin_procedure_call() {
    let code = compile("main { fire(1); }");

    assert_eq!(code, vec![0, 3, JMP, FIRE, 1, ASS, JMP, EOC]);
}

// 인자 없는 센서 읽기는 값 하나를 쌓는 명령 하나로 끝납니다.
#[test]
pub fn sensor_read_in_assignment() {
    let code = compile("main { a = xpos(); }");

    assert_eq!(code, vec![0, 3, JMP, XPOS, A, ASS, JMP, EOC]);
}

#[test]
pub fn function_arguments_stack_left_to_right() {
    let code = compile("main { a = arctan(1, 2); }");

    assert_eq!(code, vec![0, 3, JMP, 1, 2, ARCT, A, ASS, JMP, EOC]);
}

// 특수 이름을 문장 위치에서 인자 없이 부르면 명령 하나만 나옵니다.
#[test]
pub fn special_read_as_statement() {
    let code = compile("main { radar; }");

    assert_eq!(code, vec![0, 3, JMP, RDR, JMP, EOC]);
}

#[test]
pub fn if_else() {
    let code = compile("main { if (a) { b = 1; } else { b = 2; } }");

    assert_eq!(
        code,
        vec![0, 3, JMP, A, 11, JIZ, 1, B, ASS, 14, JMP, 2, B, ASS, JMP, EOC]
    );
}

#[test]
pub fn if_without_else_skips_past_body() {
    let code = compile("main { if (a) { b = 1; } }");

    assert_eq!(code, vec![0, 3, JMP, A, 9, JIZ, 1, B, ASS, JMP, EOC]);
}

#[test]
pub fn else_if_chain_exits_patch_to_chain_end() {
    let code = compile(
        "main { if (a) { b = 1; } else if (c) { b = 2; } else { b = 3; } }",
    );

    assert_eq!(
        code,
        vec![
            0, 3, JMP, // prologue
            A, 11, JIZ, 1, B, ASS, // first arm
            22, JMP, // skip to chain end
            C, 19, JIZ, 2, B, ASS, // else-if arm
            22, JMP, // skip to chain end
            3, B, ASS, // else arm
            JMP, EOC,
        ]
    );
}

// while은 몸체 뒤에 조건으로 되돌아가는 [시작, JMP] 꼬리를 붙입니다.
#[test]
pub fn while_loops_back_to_condition() {
    let code = compile("main { while (a) { b = 1; } }");

    assert_eq!(
        code,
        vec![0, 3, JMP, A, 11, JIZ, 1, B, ASS, 3, JMP, JMP, EOC]
    );
}

#[test]
pub fn init_prologue() {
    let code = compile("init { a = 0; } main { return; }");

    assert_eq!(
        code,
        vec![3, 6, JMP, 3, 9, JMP, 0, A, ASS, JMP, EOC]
    );
}

// 사용자 호출은 [복귀 주소, 진입 주소, JMP] 세 워드 트램펄린입니다.
#[test]
pub fn user_call_trampoline() {
    let code = compile("main { foo(); } foo { return; }");

    assert_eq!(code, vec![0, 3, JMP, 6, 7, JMP, JMP, JMP, EOC]);
}

// 뒤에서 정의되는 프로시저도 링크 단계에서 해소됩니다.
#[test]
pub fn forward_reference_links() {
    let code = compile("main { helper(); return; } helper { a = 1; }");

    assert_eq!(code[4], 7);
    assert_eq!(*code.last().unwrap(), EOC);
}

#[test]
pub fn procedure_names_link_case_insensitively() {
    let code = compile("main { Helper(); return; } HELPER { a = 1; }");

    assert_eq!(code[4], 7);
}

#[test]
pub fn literals_wrap_to_sixteen_bits() {
    let code = compile("main { a = 0 - 40000; }");

    assert_eq!(code[3..6], [0, 40000_u32 as u16, 0x7f61]);
}

#[test]
pub fn terminator_is_always_eoc() {
    for text in [
        "main { }",
        "main { return; }",
        "main { a = 1; } aux { b = 2; }",
    ] {
        let code = compile(text);
        assert_eq!(*code.last().unwrap(), Opcode::Eoc.code());
    }
}

// 같은 이름이 인자 개수에 따라 쓰기 형태와 읽기 형태로 갈립니다.
#[test]
pub fn overloaded_name_resolves_by_arity() {
    let code = compile("main { aim(90); a = aim(); }");

    assert_eq!(
        code,
        vec![0, 3, JMP, AIM, 90, ASS, AIM, A, ASS, JMP, EOC]
    );
}

#[test]
pub fn prologue_points_at_main_entry() {
    let mut compiler = Compiler::new("aux { return; } main { aux(); }".to_owned());
    let code = compiler.compile(Version::V2_0_0).unwrap();

    let entry = compiler.symtab()["main"];
    assert_eq!(code[..3], [0, entry as u16, JMP]);
}

#[test]
pub fn compilation_is_deterministic() {
    let text = "init { a = 0; } main { if (a > 1) { fire(1); } else { aux(); } } aux { return; }";

    assert_eq!(compile(text), compile(text));
}
