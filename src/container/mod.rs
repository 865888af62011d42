
use byteorder::{LittleEndian, ReadBytesExt};

use crate::{
    attribs::{ArmorStrength, BulletType, CpuSpeed, EnergyLevel},
    error::all_error::AllError,
};

/// 저장 파일 머리말입니다.
pub const HEADER: &[u8; 8] = b"WBMD2.0\0";

const OFFS_HEADER: usize = 0;
const OFFS_NAME: usize = 8;

const OFFS_ENERGY: usize = 36;
const OFFS_SHIELD: usize = 38;
const OFFS_ARMOR: usize = 40;
const OFFS_SPEED: usize = 42;
const OFFS_BULLET: usize = 44;
const OFFS_MISSILES: usize = 46;
const OFFS_TACNUKES: usize = 47;

const OFFS_ICON1: usize = 48;
const OFFS_ICON2: usize = 1072;

const OFFS_IS_COMPILED: usize = 2096;
const OFFS_BYTECODE_SIZE: usize = 2100;
const OFFS_BYTECODE: usize = 2102;

const HEADER_SIZE: usize = 8;
const NAME_SIZE: usize = 20;
const ICON_SIZE: usize = 1024;

/// 고정 배치 저장 컨테이너에서 읽어낸 로봇 한 대의 기록입니다.
/// 바이트코드 구획의 첫 워드는 코드 본문보다 앞서는 선두 워드입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotFile {
    pub name: String,
    pub energy: EnergyLevel,
    pub shield: EnergyLevel,
    pub armor: ArmorStrength,
    pub speed: CpuSpeed,
    pub bullet: BulletType,
    pub missiles: bool,
    pub tacnukes: bool,
    pub icon1: Vec<u8>,
    pub icon2: Vec<u8>,
    pub compiled: bool,
    pub bytecode: Vec<u16>,
    pub source: String,
}

impl RobotFile {
    pub fn from_bytes(buffer: &[u8]) -> Result<Self, AllError> {
        if buffer.len() < OFFS_BYTECODE {
            return Err(AllError::ContainerError(
                "Truncated save file".to_owned(),
            ));
        }

        if &buffer[OFFS_HEADER..OFFS_HEADER + HEADER_SIZE] != HEADER {
            return Err(AllError::ContainerError(
                "Bad save file header".to_owned(),
            ));
        }

        let name_bytes = &buffer[OFFS_NAME..OFFS_NAME + NAME_SIZE];
        let name_end = name_bytes
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(NAME_SIZE);
        let name = String::from_utf8_lossy(&name_bytes[..name_end]).into_owned();

        let energy = EnergyLevel::try_from(read_u16(buffer, OFFS_ENERGY)?)?;
        let shield = EnergyLevel::try_from(read_u16(buffer, OFFS_SHIELD)?)?;
        let armor = ArmorStrength::try_from(read_u16(buffer, OFFS_ARMOR)?)?;
        let speed = CpuSpeed::try_from(read_u16(buffer, OFFS_SPEED)?)?;
        let bullet = BulletType::try_from(read_u16(buffer, OFFS_BULLET)?)?;
        let missiles = buffer[OFFS_MISSILES] != 0;
        let tacnukes = buffer[OFFS_TACNUKES] != 0;

        let icon1 = buffer[OFFS_ICON1..OFFS_ICON1 + ICON_SIZE].to_vec();
        let icon2 = buffer[OFFS_ICON2..OFFS_ICON2 + ICON_SIZE].to_vec();

        let compiled = buffer[OFFS_IS_COMPILED] != 0;
        let size = read_u16(buffer, OFFS_BYTECODE_SIZE)? as usize;

        let code_end = OFFS_BYTECODE + size * 2;
        if buffer.len() < code_end {
            return Err(AllError::ContainerError(
                "Bytecode payload past end of file".to_owned(),
            ));
        }

        let mut bytecode = Vec::with_capacity(size);
        let mut reader = &buffer[OFFS_BYTECODE..code_end];
        for _ in 0..size {
            let word = reader
                .read_u16::<LittleEndian>()
                .map_err(|error| AllError::ContainerError(error.to_string()))?;
            bytecode.push(word);
        }

        // 바이트코드 뒤에 컴파일 전 소스 텍스트가 그대로 붙어 있습니다.
        let source_size = buffer.len().saturating_sub(code_end + 2);
        let source =
            String::from_utf8_lossy(&buffer[buffer.len() - source_size..]).into_owned();

        Ok(Self {
            name,
            energy,
            shield,
            armor,
            speed,
            bullet,
            missiles,
            tacnukes,
            icon1,
            icon2,
            compiled,
            bytecode,
            source,
        })
    }
}

fn read_u16(buffer: &[u8], offset: usize) -> Result<u16, AllError> {
    let mut slice = buffer
        .get(offset..offset + 2)
        .ok_or_else(|| AllError::ContainerError("Truncated save file".to_owned()))?;
    slice
        .read_u16::<LittleEndian>()
        .map_err(|error| AllError::ContainerError(error.to_string()))
}
