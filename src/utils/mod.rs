pub mod logger;

use crate::{
    codegen::word::Word,
    opcodes::{Opcode, OPCODE_BASE},
};

/// 정수 리터럴로 실릴 수 있는 값의 범위입니다.
pub fn is_int(value: i64) -> bool {
    (-32000..=32000).contains(&value)
}

fn inst2str(word: u16) -> String {
    let value = i64::from(word);
    if is_int(value) {
        format!("{}", value)
    } else {
        Opcode::name_of(word).to_owned()
    }
}

/// 방출 버퍼의 목록 출력입니다. 아직 링크되지 않은 워드는 그대로 찍습니다.
pub fn prettify_code(code: &[Word]) -> String {
    code.iter()
        .enumerate()
        .map(|(index, word)| match word {
            Word::Literal(value) if *value < i64::from(OPCODE_BASE) => {
                format!("{:02} {:04x} {}", index, *value as u16, value)
            }
            Word::Literal(value) => {
                let code = *value as u16;
                format!("{:02} {:04x} {}", index, code, Opcode::name_of(code))
            }
            Word::Opcode(opcode) => {
                format!("{:02} {:04x} {}", index, opcode.code(), opcode.name())
            }
            unresolved => format!("{:02} {}", index, unresolved),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 컨테이너에서 읽어낸 완성 바이트코드의 목록 출력입니다.
pub fn prettify_bytecode(words: &[u16]) -> String {
    words
        .iter()
        .enumerate()
        .map(|(index, &word)| {
            let text = if word < OPCODE_BASE {
                word.to_string()
            } else {
                inst2str(word)
            };
            format!("{:02} {:04x} {}", index, word, text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
