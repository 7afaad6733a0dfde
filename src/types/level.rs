use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse three-way bucket for a single dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Low, Level::Medium, Level::High];

    pub fn digit(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Low),
            1 => Some(Self::Medium),
            2 => Some(Self::High),
            _ => None,
        }
    }

    /// Points used when a level vector is scored at build time.
    pub fn points(self) -> u32 {
        u32::from(self.digit())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level digits joined in dimension order, e.g. `"120"`. Addresses a result page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ResultCode(String);

impl ResultCode {
    pub fn from_levels(levels: &[Level]) -> Self {
        Self(
            levels
                .iter()
                .map(|level| char::from(b'0' + level.digit()))
                .collect(),
        )
    }

    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        raw.bytes()
            .map(|byte| byte.checked_sub(b'0').and_then(Level::from_digit))
            .collect::<Option<Vec<_>>>()
            .map(|levels| Self::from_levels(&levels))
    }

    pub fn levels(&self) -> Vec<Level> {
        self.0
            .bytes()
            .filter_map(|byte| byte.checked_sub(b'0').and_then(Level::from_digit))
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
