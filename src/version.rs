#![allow(dead_code)]

use std::{fmt, str::FromStr};

use crate::error::all_error::AllError;

/// 대상 바이트코드 버전입니다. 예약 매개변수로, 아직 어떤 코드 경로도
/// 이 값에 따라 갈라지지 않습니다.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V2_0_0,
    V2_1_0,
}

impl Version {
    pub fn number(self) -> (u16, u16, u16) {
        match self {
            Version::V2_0_0 => (2, 0, 0),
            Version::V2_1_0 => (2, 1, 0),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let (major, minor, patch) = self.number();
        write!(formatter, "{}.{}.{}", major, minor, patch)
    }
}

impl FromStr for Version {
    type Err = AllError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "2.0.0" => Ok(Version::V2_0_0),
            "2.1.0" => Ok(Version::V2_1_0),
            _ => Err(AllError::IOError(format!(
                "Unknown target version: {}",
                text
            ))),
        }
    }
}
