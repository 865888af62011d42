#![allow(dead_code)]

//! 저장 파일 속성 블록의 순수 데이터 표들입니다.

use std::fmt;

use crate::error::all_error::AllError;

/// 에너지와 방어막 공급 단계입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyLevel {
    High,
    Normal,
    Low,
    None,
}

impl TryFrom<u16> for EnergyLevel {
    type Error = AllError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EnergyLevel::High),
            1 => Ok(EnergyLevel::Normal),
            2 => Ok(EnergyLevel::Low),
            3 => Ok(EnergyLevel::None),
            _ => Err(AllError::ContainerError(format!(
                "Unknown supply level: {}",
                value
            ))),
        }
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            EnergyLevel::High => "High",
            EnergyLevel::Normal => "Normal",
            EnergyLevel::Low => "Low",
            EnergyLevel::None => "None",
        };
        write!(formatter, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmorStrength {
    Strong,
    Normal,
    Weak,
    VeryWeak,
}

impl TryFrom<u16> for ArmorStrength {
    type Error = AllError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ArmorStrength::Strong),
            1 => Ok(ArmorStrength::Normal),
            2 => Ok(ArmorStrength::Weak),
            3 => Ok(ArmorStrength::VeryWeak),
            _ => Err(AllError::ContainerError(format!(
                "Unknown armor strength: {}",
                value
            ))),
        }
    }
}

impl fmt::Display for ArmorStrength {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ArmorStrength::Strong => "Strong",
            ArmorStrength::Normal => "Normal",
            ArmorStrength::Weak => "Weak",
            ArmorStrength::VeryWeak => "Very Weak",
        };
        write!(formatter, "{}", name)
    }
}

/// CPU 속도 단계입니다. 수치는 틱당 사이클 수입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuSpeed {
    Cpc25,
    Cpc20,
    Cpc15,
    Cpc10,
}

impl CpuSpeed {
    pub fn cycles_per_tick(self) -> u16 {
        match self {
            CpuSpeed::Cpc25 => 25,
            CpuSpeed::Cpc20 => 20,
            CpuSpeed::Cpc15 => 15,
            CpuSpeed::Cpc10 => 10,
        }
    }
}

impl TryFrom<u16> for CpuSpeed {
    type Error = AllError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CpuSpeed::Cpc25),
            1 => Ok(CpuSpeed::Cpc20),
            2 => Ok(CpuSpeed::Cpc15),
            3 => Ok(CpuSpeed::Cpc10),
            _ => Err(AllError::ContainerError(format!(
                "Unknown CPU speed: {}",
                value
            ))),
        }
    }
}

impl fmt::Display for CpuSpeed {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{} cpc", self.cycles_per_tick())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletType {
    Explosive,
    Normal,
    Rubber,
}

impl TryFrom<u16> for BulletType {
    type Error = AllError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BulletType::Explosive),
            1 => Ok(BulletType::Normal),
            2 => Ok(BulletType::Rubber),
            _ => Err(AllError::ContainerError(format!(
                "Unknown bullet type: {}",
                value
            ))),
        }
    }
}

impl fmt::Display for BulletType {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            BulletType::Explosive => "Explosive",
            BulletType::Normal => "Normal",
            BulletType::Rubber => "Rubber",
        };
        write!(formatter, "{}", name)
    }
}
