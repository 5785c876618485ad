//! Day 11: Seating System

use super::numbered_lines;
use crate::domain::model::Answer;
use crate::domain::ports::Puzzle;
use crate::utils::error::{Result, SolveError};

const DAY: u8 = 11;

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub struct SeatingSystem;

impl Puzzle for SeatingSystem {
    fn day(&self) -> u8 {
        DAY
    }

    fn title(&self) -> &'static str {
        "Seating System"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        let layout = SeatLayout::parse(input)?;
        Ok(layout.settle(Rule::ADJACENT).occupied_count().into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        let layout = SeatLayout::parse(input)?;
        Ok(layout.settle(Rule::LINE_OF_SIGHT).occupied_count().into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Floor,
    Empty,
    Occupied,
}

impl Cell {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Floor),
            'L' => Some(Cell::Empty),
            '#' => Some(Cell::Occupied),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbourhood {
    /// 周圍八格
    Adjacent,
    /// 八個方向上第一個看得到的座位（略過地板）
    LineOfSight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub neighbourhood: Neighbourhood,
    /// 有人的鄰座達到此數量時離座
    pub tolerance: usize,
}

impl Rule {
    pub const ADJACENT: Rule = Rule {
        neighbourhood: Neighbourhood::Adjacent,
        tolerance: 4,
    };
    pub const LINE_OF_SIGHT: Rule = Rule {
        neighbourhood: Neighbourhood::LineOfSight,
        tolerance: 5,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatLayout {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl SeatLayout {
    pub fn parse(input: &str) -> Result<Self> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (line_no, line) in numbered_lines(input) {
            let row = line
                .chars()
                .map(|c| {
                    Cell::from_char(c).ok_or_else(|| {
                        SolveError::parse(DAY, line_no, format!("unexpected cell '{}'", c))
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(SolveError::parse(
                        DAY,
                        line_no,
                        format!("row has {} cells, expected {}", row.len(), w),
                    ))
                }
                Some(_) => {}
            }
            cells.extend(row);
            height += 1;
        }

        Ok(Self {
            cells,
            width: width.unwrap_or(0),
            height,
        })
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row < self.height && column < self.width {
            Some(self.cells[row * self.width + column])
        } else {
            None
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Occupied).count()
    }

    /// 所有座位同時套用規則；回傳新的佈局與是否有任何變化
    pub fn step(&self, rule: Rule) -> (Self, bool) {
        let mut changed = false;
        let mut cells = Vec::with_capacity(self.cells.len());

        for row in 0..self.height {
            for column in 0..self.width {
                let cell = self.cells[row * self.width + column];
                let next = match cell {
                    Cell::Floor => Cell::Floor,
                    Cell::Empty if self.occupied_neighbours(row, column, rule) == 0 => {
                        Cell::Occupied
                    }
                    Cell::Occupied
                        if self.occupied_neighbours(row, column, rule) >= rule.tolerance =>
                    {
                        Cell::Empty
                    }
                    other => other,
                };
                changed |= next != cell;
                cells.push(next);
            }
        }

        (
            Self {
                cells,
                width: self.width,
                height: self.height,
            },
            changed,
        )
    }

    /// 反覆套用規則直到穩定
    pub fn settle(self, rule: Rule) -> Self {
        let mut layout = self;
        let mut rounds = 0;
        loop {
            let (next, changed) = layout.step(rule);
            if !changed {
                tracing::debug!("Seat layout stable after {} rounds", rounds);
                return next;
            }
            layout = next;
            rounds += 1;
        }
    }

    fn occupied_neighbours(&self, row: usize, column: usize, rule: Rule) -> usize {
        DIRECTIONS
            .iter()
            .filter(|(dr, dc)| {
                let first_seat = match rule.neighbourhood {
                    Neighbourhood::Adjacent => self.offset(row, column, *dr, *dc),
                    Neighbourhood::LineOfSight => self.first_visible(row, column, *dr, *dc),
                };
                first_seat == Some(Cell::Occupied)
            })
            .count()
    }

    fn offset(&self, row: usize, column: usize, dr: isize, dc: isize) -> Option<Cell> {
        let r = row.checked_add_signed(dr)?;
        let c = column.checked_add_signed(dc)?;
        self.get(r, c)
    }

    fn first_visible(&self, row: usize, column: usize, dr: isize, dc: isize) -> Option<Cell> {
        let (mut r, mut c) = (row, column);
        loop {
            r = r.checked_add_signed(dr)?;
            c = c.checked_add_signed(dc)?;
            match self.get(r, c)? {
                Cell::Floor => continue,
                seat => return Some(seat),
            }
        }
    }
}
