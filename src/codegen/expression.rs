use crate::{
    ast::{
        expression::{
            call::CallExpression, integer::IntegerExpression, unary::UnaryExpression, Expression,
        },
        operator::{binary::BinaryOperator, unary::UnaryOperator},
    },
    error::all_error::AllError,
    opcodes::Opcode,
};

use super::{word::Word, CodeGenerator};

impl CodeGenerator {
    // 피연산자를 왼쪽부터 쌓고 연산자를 마지막에 놓는 후위 순서입니다.
    pub(super) fn expression(&mut self, node: &Expression) -> Result<(), AllError> {
        match node {
            Expression::Integer(integer) => {
                let value = integer_value(integer)?;
                self.code.push(Word::Literal(value));

                Ok(())
            }
            Expression::Variable(variable) => {
                let opcode = self.var_opcode(variable.name)?;
                self.code.push(Word::Opcode(opcode));

                Ok(())
            }
            Expression::Call(call) => self.handle_call(call),
            Expression::Binary(binary) => {
                self.expression(&binary.lhs)?;
                self.expression(&binary.rhs)?;
                self.code.push(Word::Opcode(binary_opcode(binary.operator)));

                Ok(())
            }
            Expression::Unary(unary) => self.handle_unary(unary),
        }
    }

    // 정수 리터럴에 대한 단항 연산은 컴파일 시점에 접습니다.
    // NEG/NOT 명령은 리터럴이 아닌 피연산자에만 방출됩니다.
    fn handle_unary(&mut self, node: &UnaryExpression) -> Result<(), AllError> {
        if let Expression::Integer(integer) = node.operand.as_ref() {
            let value = integer_value(integer)?;
            let folded = match node.operator {
                UnaryOperator::Negate => -value,
                UnaryOperator::Not => {
                    if value != 0 {
                        0
                    } else {
                        1
                    }
                }
            };
            self.code.push(Word::Literal(folded));

            return Ok(());
        }

        self.expression(&node.operand)?;
        self.code.push(Word::Opcode(unary_opcode(node.operator)));

        Ok(())
    }

    pub(super) fn handle_call(&mut self, node: &CallExpression) -> Result<(), AllError> {
        let opcode = builtin_opcode(&node.name);

        let expected = opcode.map(Opcode::nargs).unwrap_or(0);
        let actual = node.arguments.len();
        if expected != actual {
            // 특수 이름은 인자 없이 부르면 읽기 형태로 허용됩니다.
            let special_read = opcode.map(Opcode::is_special).unwrap_or(false) && actual == 0;
            if !special_read {
                return Err(AllError::CodegenError(format!(
                    "Expected {} parameters for {}. Instead, got {} on {},{}",
                    expected, node.name, actual, node.line, node.column
                )));
            }
        }

        match opcode {
            Some(opcode) if opcode.is_procedure() => {
                self.code.push(Word::Opcode(opcode));
                if actual == 1 {
                    self.expression(&node.arguments[0])?;
                    self.code.push(Word::Opcode(Opcode::Ass));
                }

                Ok(())
            }
            Some(opcode) => {
                for argument in &node.arguments {
                    self.expression(argument)?;
                }
                self.code.push(Word::Opcode(opcode));

                Ok(())
            }
            None => {
                // 사용자 프로시저 호출은 [복귀 주소, 대상 주소, JMP] 세 워드
                // 트램펄린입니다. 복귀 주소는 언제나 현재 위치 + 3입니다.
                let return_address = self.address() + 3;
                self.code.push(Word::Literal(return_address as i64));
                self.code.push(Word::UnresolvedCall(node.name.to_lowercase()));
                self.code.push(Word::Opcode(Opcode::Jmp));

                Ok(())
            }
        }
    }
}

fn integer_value(node: &IntegerExpression) -> Result<i64, AllError> {
    node.lexeme
        .parse::<i64>()
        .map_err(|_| AllError::CodegenError(format!("Invalid integer literal {}", node.lexeme)))
}

// 소스의 내장 이름을 명령 코드에 맺어줍니다. 이름은 대소문자를 가리지 않습니다.
fn builtin_opcode(name: &str) -> Option<Opcode> {
    match name.to_lowercase().as_str() {
        "aim" => Some(Opcode::Aim),
        "channel" => Some(Opcode::Chan),
        "missile" => Some(Opcode::Miss),
        "nuke" => Some(Opcode::Nuke),
        "shield" => Some(Opcode::Shld),
        "speedx" => Some(Opcode::Spx),
        "speedy" => Some(Opcode::Spy),
        "signal" => Some(Opcode::Sig),
        "arctan" => Some(Opcode::Arct),
        "sqrt" => Some(Opcode::Sqrt),
        "collision" => Some(Opcode::Col),
        "damage" => Some(Opcode::Dmg),
        "energy" => Some(Opcode::Egy),
        "radar" => Some(Opcode::Rdr),
        "random" => Some(Opcode::Rnd),
        "range" => Some(Opcode::Rnge),
        "xpos" => Some(Opcode::Xpos),
        "ypos" => Some(Opcode::Ypos),
        "fire" => Some(Opcode::Fire),
        "movex" => Some(Opcode::Movx),
        "movey" => Some(Opcode::Movy),
        _ => None,
    }
}

fn binary_opcode(operator: BinaryOperator) -> Opcode {
    match operator {
        BinaryOperator::Add => Opcode::Add,
        BinaryOperator::Subtract => Opcode::Sub,
        BinaryOperator::Multiply => Opcode::Mul,
        BinaryOperator::Divide => Opcode::Div,
        BinaryOperator::Modulo => Opcode::Mod,
        BinaryOperator::Equal => Opcode::Eq,
        BinaryOperator::NotEqual => Opcode::Neq,
        BinaryOperator::GreaterThan => Opcode::Gt,
        BinaryOperator::GreaterThanOrEqual => Opcode::Gte,
        BinaryOperator::LessThan => Opcode::Lt,
        BinaryOperator::LessThanOrEqual => Opcode::Lte,
        BinaryOperator::And => Opcode::And,
        BinaryOperator::Or => Opcode::Or,
        BinaryOperator::Xor => Opcode::Xor,
    }
}

fn unary_opcode(operator: UnaryOperator) -> Opcode {
    match operator {
        UnaryOperator::Negate => Opcode::Neg,
        UnaryOperator::Not => Opcode::Not,
    }
}
