use std::collections::HashMap;

use crate::{
    codegen::{word::Word, CodeGenerator},
    error::all_error::AllError,
    parser::Parser,
    version::Version,
};

/// 파서와 코드 생성기를 묶는 얇은 전면부입니다.
/// 컴파일이 실패해도 부분 출력과 심볼 테이블을 조회할 수 있습니다.
#[derive(Debug)]
pub struct Compiler {
    parser: Parser,
    codegen: CodeGenerator,
}

impl Compiler {
    pub fn new(source: String) -> Self {
        Self {
            parser: Parser::new(source),
            codegen: CodeGenerator::new(Version::V2_0_0),
        }
    }

    pub fn reset(&mut self) {
        self.parser.reset();
        self.codegen.reset();
    }

    pub fn compile(&mut self, version: Version) -> Result<Vec<u16>, AllError> {
        self.reset();

        let program = self.parser.parse()?;

        self.codegen = CodeGenerator::new(version);
        self.codegen.generate(&program)
    }

    /// 마지막 컴파일이 남긴 워드 열입니다. 실패했을 경우 부분 출력입니다.
    pub fn code(&self) -> &[Word] {
        self.codegen.code()
    }

    pub fn symtab(&self) -> &HashMap<String, usize> {
        self.codegen.symtab()
    }
}
