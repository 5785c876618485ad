//! Day 5: Binary Boarding

use super::numbered_lines;
use crate::domain::model::Answer;
use crate::domain::ports::Puzzle;
use crate::utils::error::{Result, SolveError};
use std::collections::HashSet;

const DAY: u8 = 5;
const ROW_CHARS: usize = 7;
const COLUMN_CHARS: usize = 3;

pub struct BinaryBoarding;

impl Puzzle for BinaryBoarding {
    fn day(&self) -> u8 {
        DAY
    }

    fn title(&self) -> &'static str {
        "Binary Boarding"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        parse_seats(input)?
            .iter()
            .map(Seat::id)
            .max()
            .map(Answer::from)
            .ok_or_else(|| SolveError::no_solution(DAY, "no boarding passes"))
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        let ids: HashSet<u32> = parse_seats(input)?.iter().map(Seat::id).collect();
        find_missing_seat(&ids)
            .map(Answer::from)
            .ok_or_else(|| SolveError::no_solution(DAY, "no free seat between two taken ones"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub row: u32,
    pub column: u32,
}

impl Seat {
    /// `FBFBBFFRLR` 形式的登機證；F/L 取下半，B/R 取上半
    pub fn decode(line_no: usize, pass: &str) -> Result<Self> {
        if !pass.is_ascii() || pass.len() != ROW_CHARS + COLUMN_CHARS {
            return Err(SolveError::parse(
                DAY,
                line_no,
                format!(
                    "boarding pass '{}' must be {} ASCII characters",
                    pass,
                    ROW_CHARS + COLUMN_CHARS
                ),
            ));
        }
        let (row, column) = pass.split_at(ROW_CHARS);

        Ok(Self {
            row: decode_half(line_no, row, 'F', 'B')?,
            column: decode_half(line_no, column, 'L', 'R')?,
        })
    }

    pub fn id(&self) -> u32 {
        self.row * 8 + self.column
    }
}

fn decode_half(line_no: usize, code: &str, lower: char, upper: char) -> Result<u32> {
    code.chars().try_fold(0, |acc, c| match c {
        c if c == lower => Ok(acc << 1),
        c if c == upper => Ok((acc << 1) | 1),
        other => Err(SolveError::parse(
            DAY,
            line_no,
            format!("unexpected '{}', expected '{}' or '{}'", other, lower, upper),
        )),
    })
}

fn parse_seats(input: &str) -> Result<Vec<Seat>> {
    numbered_lines(input)
        .map(|(line_no, line)| Seat::decode(line_no, line))
        .collect()
}

/// 前後座位都有人、自己卻不在清單上的那個座位
pub fn find_missing_seat(ids: &HashSet<u32>) -> Option<u32> {
    let max_id = 1u32 << (ROW_CHARS + COLUMN_CHARS);
    (1..max_id - 1)
        .find(|id| !ids.contains(id) && ids.contains(&(id - 1)) && ids.contains(&(id + 1)))
}
