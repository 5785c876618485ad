//! Day 2: Password Philosophy

use super::{numbered_lines, parse_number};
use crate::domain::model::Answer;
use crate::domain::ports::Puzzle;
use crate::utils::error::{Result, SolveError};

const DAY: u8 = 2;

pub struct PasswordPhilosophy;

impl Puzzle for PasswordPhilosophy {
    fn day(&self) -> u8 {
        DAY
    }

    fn title(&self) -> &'static str {
        "Password Philosophy"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        let entries = parse_entries(input)?;
        Ok(entries.iter().filter(|e| e.is_valid_by_count()).count().into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        let entries = parse_entries(input)?;
        Ok(entries.iter().filter(|e| e.is_valid_by_position()).count().into())
    }
}

/// 一行密碼資料庫：`1-3 a: abcde`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEntry {
    pub first: usize,
    pub second: usize,
    pub letter: char,
    pub password: String,
}

impl PasswordEntry {
    pub fn parse(line_no: usize, line: &str) -> Result<Self> {
        let (policy, password) = line
            .split_once(':')
            .ok_or_else(|| SolveError::parse(DAY, line_no, "missing ':' after policy"))?;
        let (range, letter) = policy
            .trim()
            .split_once(' ')
            .ok_or_else(|| SolveError::parse(DAY, line_no, "missing policy letter"))?;
        let (first, second) = range
            .split_once('-')
            .ok_or_else(|| SolveError::parse(DAY, line_no, "policy range needs '-'"))?;

        let mut letters = letter.trim().chars();
        let letter = match (letters.next(), letters.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(SolveError::parse(
                    DAY,
                    line_no,
                    format!("policy letter must be one character, got '{}'", letter.trim()),
                ))
            }
        };

        Ok(Self {
            first: parse_number(DAY, line_no, first)?,
            second: parse_number(DAY, line_no, second)?,
            letter,
            password: password.trim().to_string(),
        })
    }

    /// 舊規則：字母出現次數介於 first..=second
    pub fn is_valid_by_count(&self) -> bool {
        let count = self.password.chars().filter(|c| *c == self.letter).count();
        (self.first..=self.second).contains(&count)
    }

    /// 新規則：兩個位置（1 起算）中恰好一個是該字母
    pub fn is_valid_by_position(&self) -> bool {
        let holds = |position: usize| {
            position
                .checked_sub(1)
                .and_then(|i| self.password.chars().nth(i))
                .is_some_and(|c| c == self.letter)
        };
        holds(self.first) != holds(self.second)
    }
}

fn parse_entries(input: &str) -> Result<Vec<PasswordEntry>> {
    numbered_lines(input)
        .map(|(line_no, line)| PasswordEntry::parse(line_no, line))
        .collect()
}
