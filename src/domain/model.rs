use crate::utils::error::{Result, SolveError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// 謎題日期，1 到 25
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(u8);

impl Day {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 25;

    pub fn new(day: u8) -> Result<Self> {
        crate::utils::validation::validate_range("day", day, Self::FIRST, Self::LAST)?;
        Ok(Self(day))
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Day {
    type Error = SolveError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl TryFrom<u8> for Part {
    type Error = SolveError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Part::One),
            2 => Ok(Part::Two),
            other => Err(SolveError::InvalidConfigValueError {
                field: "part".to_string(),
                value: other.to_string(),
                reason: "Part must be 1 or 2".to_string(),
            }),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Number(i64),
    Text(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{}", n),
            Answer::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! answer_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Answer {
                fn from(value: $t) -> Self {
                    Answer::Number(value as i64)
                }
            }
        )*
    };
}

answer_from_int!(i32, i64, u32, usize);

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

/// 單一謎題的輸入內容
#[derive(Debug, Clone)]
pub struct PuzzleInput {
    pub day: Day,
    pub source: String,
    pub content: String,
}

/// 單一部分的解答與耗時
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub day: Day,
    pub part: Part,
    pub title: String,
    pub answer: Answer,
    #[serde(with = "micros")]
    pub elapsed: Duration,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Day {} part {} ({}): {}",
            self.day, self.part, self.title, self.answer
        )
    }
}

/// 整次執行的結果，供報表輸出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub solutions: Vec<Solution>,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

mod micros {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_micros() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_micros)
    }
}
