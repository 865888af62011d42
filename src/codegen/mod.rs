pub(crate) mod expression;
pub mod word;

pub(crate) mod test;

use std::collections::{HashMap, HashSet};

use crate::{
    ast::{
        program::{Procedure, Program},
        statement::{
            assign::AssignStatement, branch::IfStatement, repeat::WhileStatement, Statement,
        },
    },
    error::all_error::AllError,
    opcodes::Opcode,
    version::Version,
};

use self::word::Word;

/// 구문 트리를 단일 전진 패스로 워드 열에 방출합니다.
/// 아직 모르는 주소는 자리표시자로 적어두었다가 제자리에서 패치합니다.
#[derive(Debug)]
pub struct CodeGenerator {
    version: Version,
    code: Vec<Word>,
    symtab: HashMap<String, usize>,
}

impl CodeGenerator {
    pub fn new(version: Version) -> Self {
        Self {
            version,
            code: vec![],
            symtab: HashMap::new(),
        }
    }

    pub fn reset(&mut self) {
        self.code.clear();
        self.symtab.clear();
    }

    /// 실패한 컴파일의 부분 출력도 그대로 들여다볼 수 있습니다.
    pub fn code(&self) -> &[Word] {
        &self.code
    }

    pub fn symtab(&self) -> &HashMap<String, usize> {
        &self.symtab
    }

    #[allow(dead_code)]
    pub fn version(&self) -> Version {
        self.version
    }

    pub fn generate(&mut self, program: &Program) -> Result<Vec<u16>, AllError> {
        self.reset();

        let main = program
            .procedures
            .iter()
            .find(|procedure| procedure.name.to_lowercase() == "main")
            .ok_or_else(|| {
                AllError::CodegenError("Unable to find 'main' procedure".to_owned())
            })?;

        let init = program
            .procedures
            .iter()
            .find(|procedure| procedure.name.to_lowercase() == "init");

        match init {
            Some(init) => {
                self.code = vec![
                    Word::Literal(3),
                    Word::UnresolvedCall("init".to_owned()),
                    Word::Opcode(Opcode::Jmp),
                    Word::Literal(3),
                    Word::UnresolvedCall("main".to_owned()),
                    Word::Opcode(Opcode::Jmp),
                ];
                // init 끝에는 JMP를 붙이지 않고 다음 코드로 그대로 떨어집니다.
                self.procedure(init, false)?;
            }
            None => {
                self.code = vec![
                    Word::Literal(0),
                    Word::UnresolvedCall("main".to_owned()),
                    Word::Opcode(Opcode::Jmp),
                ];
            }
        }

        self.procedure(main, true)?;

        for procedure in &program.procedures {
            let name = procedure.name.to_lowercase();
            if name != "init" && name != "main" {
                self.procedure(procedure, true)?;
            }
        }

        self.link()?;
        self.code.push(Word::Opcode(Opcode::Eoc));

        self.code.iter().map(Word::to_u16).collect()
    }

    fn procedure(&mut self, node: &Procedure, return_jump: bool) -> Result<(), AllError> {
        let address = self.address();

        for statement in &node.statements {
            self.statement(statement)?;
        }

        // 몸체가 명시적 return으로 끝났으면 복귀 JMP는 이미 놓여 있습니다.
        let returned = matches!(node.statements.last(), Some(Statement::Return));
        if return_jump && !returned {
            self.code.push(Word::Opcode(Opcode::Jmp));
        }

        let name = node.name.to_lowercase();
        if self.symtab.contains_key(&name) {
            return Err(AllError::CodegenError(format!(
                "Procedure {} defined more than once",
                node.name
            )));
        }
        self.symtab.insert(name, address);

        Ok(())
    }

    fn statement(&mut self, node: &Statement) -> Result<(), AllError> {
        match node {
            Statement::Assign(assign) => self.handle_assign(assign),
            Statement::Call(call) => self.handle_call(call),
            Statement::If(branch) => self.handle_if(branch),
            Statement::While(repeat) => self.handle_while(repeat),
            Statement::Return => {
                self.code.push(Word::Opcode(Opcode::Jmp));
                Ok(())
            }
        }
    }

    // 우변 값을 먼저 쌓고 변수 슬롯과 ASS를 잇따라 놓습니다.
    fn handle_assign(&mut self, node: &AssignStatement) -> Result<(), AllError> {
        self.expression(&node.value)?;
        let variable = self.var_opcode(node.variable)?;
        self.code.push(Word::Opcode(variable));
        self.code.push(Word::Opcode(Opcode::Ass));

        Ok(())
    }

    fn handle_if(&mut self, node: &IfStatement) -> Result<(), AllError> {
        self.expression(&node.condition)?;

        let mut else_position = self.address();
        let mut end_positions = HashSet::new();
        end_positions.insert(else_position);
        self.code.push(Word::UnresolvedAddr);
        self.code.push(Word::Opcode(Opcode::Jiz));

        for statement in &node.body {
            self.statement(statement)?;
        }

        for arm in &node.else_ifs {
            self.open_else_arm(else_position, &mut end_positions);

            self.expression(&arm.condition)?;
            else_position = self.address();
            end_positions.insert(else_position);
            self.code.push(Word::UnresolvedAddr);
            self.code.push(Word::Opcode(Opcode::Jiz));

            for statement in &arm.body {
                self.statement(statement)?;
            }
        }

        if let Some(else_body) = &node.else_body {
            self.open_else_arm(else_position, &mut end_positions);

            for statement in else_body {
                self.statement(statement)?;
            }
        }

        let end = self.address();
        for position in end_positions {
            self.patch(position, end);
        }

        Ok(())
    }

    // 직전 팔의 JIZ 대상을 다음 팔 시작으로 패치하고,
    // 사슬 끝으로 건너뛸 [자리표시자, JMP] 한 쌍을 새로 엽니다.
    fn open_else_arm(&mut self, else_position: usize, end_positions: &mut HashSet<usize>) {
        self.patch(else_position, self.address() + 2);
        end_positions.remove(&else_position);
        end_positions.insert(self.address());
        self.code.push(Word::UnresolvedAddr);
        self.code.push(Word::Opcode(Opcode::Jmp));
    }

    // 몸체 뒤에 조건 평가로 되돌아가는 [시작 주소, JMP] 꼬리를 붙입니다.
    fn handle_while(&mut self, node: &WhileStatement) -> Result<(), AllError> {
        let start = self.address();
        self.expression(&node.condition)?;

        let exit_position = self.address();
        self.code.push(Word::UnresolvedAddr);
        self.code.push(Word::Opcode(Opcode::Jiz));

        for statement in &node.body {
            self.statement(statement)?;
        }

        self.code.push(Word::Literal(start as i64));
        self.code.push(Word::Opcode(Opcode::Jmp));
        let exit = self.address();
        self.patch(exit_position, exit);

        Ok(())
    }

    // 방출이 끝난 뒤 CALL_<name> 워드를 심볼 테이블의 진입 주소로 바꿉니다.
    fn link(&mut self) -> Result<(), AllError> {
        for index in 0..self.code.len() {
            if let Word::UnresolvedCall(name) = &self.code[index] {
                let address = self.symtab.get(name).copied().ok_or_else(|| {
                    AllError::CodegenError(format!("Call to undefined procedure '{}'", name))
                })?;
                self.code[index] = Word::Literal(address as i64);
            }
        }

        Ok(())
    }

    pub(super) fn var_opcode(&self, letter: char) -> Result<Opcode, AllError> {
        let lower = letter.to_ascii_lowercase();
        if !lower.is_ascii_lowercase() {
            return Err(AllError::CodegenError(format!(
                "Invalid variable name {}",
                letter
            )));
        }

        let offset = lower as u16 - 'a' as u16;
        Opcode::from_code(Opcode::A.code() + offset).ok_or_else(|| {
            AllError::CodegenError(format!("Invalid variable name {}", letter))
        })
    }

    pub(super) fn address(&self) -> usize {
        self.code.len()
    }

    fn patch(&mut self, position: usize, address: usize) {
        self.code[position] = Word::Literal(address as i64);
    }
}
