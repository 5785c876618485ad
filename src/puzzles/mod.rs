pub mod day01;
pub mod day02;
pub mod day05;
pub mod day08;
pub mod day11;
pub mod day12;
pub mod day16;
pub mod day17;
pub mod day18;

use crate::domain::model::Day;
use crate::domain::ports::Puzzle;
use crate::utils::error::{Result, SolveError};
use std::collections::BTreeMap;
use std::str::FromStr;

/// 依日期查找謎題
pub struct PuzzleRegistry {
    puzzles: BTreeMap<u8, Box<dyn Puzzle>>,
}

impl PuzzleRegistry {
    pub fn empty() -> Self {
        Self {
            puzzles: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, puzzle: Box<dyn Puzzle>) {
        if let Some(previous) = self.puzzles.insert(puzzle.day(), puzzle) {
            tracing::warn!("Replaced puzzle for day {}", previous.day());
        }
    }

    pub fn get(&self, day: Day) -> Result<&dyn Puzzle> {
        self.puzzles
            .get(&day.number())
            .map(|p| p.as_ref())
            .ok_or(SolveError::UnknownDay { day: day.number() })
    }

    pub fn days(&self) -> Vec<Day> {
        self.puzzles
            .keys()
            .filter_map(|d| Day::new(*d).ok())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Puzzle> {
        self.puzzles.values().map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}

impl Default for PuzzleRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(day01::ReportRepair));
        registry.register(Box::new(day02::PasswordPhilosophy));
        registry.register(Box::new(day05::BinaryBoarding));
        registry.register(Box::new(day08::HandheldHalting));
        registry.register(Box::new(day11::SeatingSystem));
        registry.register(Box::new(day12::RainRisk));
        registry.register(Box::new(day16::TicketTranslation));
        registry.register(Box::new(day17::ConwayCubes));
        registry.register(Box::new(day18::OperationOrder));
        registry
    }
}

/// 非空白行，附 1 起算的行號
pub(crate) fn numbered_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

pub(crate) fn parse_number<T>(day: u8, line: usize, text: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    text.trim()
        .parse::<T>()
        .map_err(|e| SolveError::parse(day, line, format!("invalid number '{}': {}", text.trim(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_days() {
        let registry = PuzzleRegistry::default();
        let days: Vec<u8> = registry.days().into_iter().map(Day::number).collect();
        assert_eq!(days, vec![1, 2, 5, 8, 11, 12, 16, 17, 18]);
        assert_eq!(registry.len(), 9);
    }

    #[test]
    fn test_unknown_day() {
        let registry = PuzzleRegistry::default();
        let err = registry.get(Day::new(3).unwrap()).err().unwrap();
        assert!(matches!(err, SolveError::UnknownDay { day: 3 }));
    }

    #[test]
    fn test_numbered_lines_skip_blank() {
        let lines: Vec<_> = numbered_lines("a\n\n  b  \n").collect();
        assert_eq!(lines, vec![(1, "a"), (3, "b")]);
    }

    #[test]
    fn test_parse_number_reports_line() {
        let err = parse_number::<i64>(1, 4, "12x").unwrap_err();
        assert!(err.to_string().starts_with("Day 1 line 4"));
    }
}
