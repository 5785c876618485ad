//! Day 12: Rain Risk

use super::{numbered_lines, parse_number};
use crate::domain::model::Answer;
use crate::domain::ports::Puzzle;
use crate::utils::error::{Result, SolveError};

const DAY: u8 = 12;

pub struct RainRisk;

impl Puzzle for RainRisk {
    fn day(&self) -> u8 {
        DAY
    }

    fn title(&self) -> &'static str {
        "Rain Risk"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        let actions = parse_actions(input)?;
        let ship = Navigator::new(Mode::Direct, Vector::new(1, 0)).follow(&actions)?;
        distance_from_start(ship)
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        let actions = parse_actions(input)?;
        let ship = Navigator::new(Mode::Waypoint, Vector::new(10, 1)).follow(&actions)?;
        distance_from_start(ship)
    }
}

fn distance_from_start(ship: Navigator) -> Result<Answer> {
    ship.position
        .manhattan()
        .map(Answer::from)
        .ok_or_else(|| SolveError::evaluation(DAY, "manhattan distance overflows i64"))
}

/// 東為 x 正向，北為 y 正向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vector {
    pub x: i64,
    pub y: i64,
}

impl Vector {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// `self + other * times`，溢位時為 None
    fn add(self, other: Vector, times: i64) -> Option<Self> {
        let x = other.x.checked_mul(times)?.checked_add(self.x)?;
        let y = other.y.checked_mul(times)?.checked_add(self.y)?;
        Some(Self::new(x, y))
    }

    /// 順時針轉 `quarter_turns` 個 90 度
    fn rotate_clockwise(self, quarter_turns: i64) -> Option<Self> {
        Some(match quarter_turns.rem_euclid(4) {
            0 => self,
            1 => Self::new(self.y, self.x.checked_neg()?),
            2 => Self::new(self.x.checked_neg()?, self.y.checked_neg()?),
            _ => Self::new(self.y.checked_neg()?, self.x),
        })
    }

    pub fn manhattan(self) -> Option<i64> {
        self.x.checked_abs()?.checked_add(self.y.checked_abs()?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// N/S/E/W
    Shift(Vector),
    /// L/R，以順時針 90 度為單位
    Turn(i64),
    Forward(i64),
}

impl Action {
    pub fn parse(line_no: usize, line: &str) -> Result<Self> {
        let mut chars = line.chars();
        let code = chars
            .next()
            .ok_or_else(|| SolveError::parse(DAY, line_no, "empty instruction"))?;
        let value: i64 = parse_number(DAY, line_no, chars.as_str())?;
        let negated = || {
            value
                .checked_neg()
                .ok_or_else(|| SolveError::parse(DAY, line_no, "value out of range"))
        };

        let quarter_turns = |degrees: i64| {
            if degrees % 90 == 0 {
                Ok(degrees / 90)
            } else {
                Err(SolveError::parse(
                    DAY,
                    line_no,
                    format!("turn of {} degrees is not a multiple of 90", degrees),
                ))
            }
        };

        match code {
            'N' => Ok(Action::Shift(Vector::new(0, value))),
            'S' => Ok(Action::Shift(Vector::new(0, negated()?))),
            'E' => Ok(Action::Shift(Vector::new(value, 0))),
            'W' => Ok(Action::Shift(Vector::new(negated()?, 0))),
            'L' => Ok(Action::Turn(-quarter_turns(value)?)),
            'R' => Ok(Action::Turn(quarter_turns(value)?)),
            'F' => Ok(Action::Forward(value)),
            other => Err(SolveError::parse(
                DAY,
                line_no,
                format!("unknown action '{}'", other),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// N/S/E/W 直接移動船，`heading` 是船頭方向
    Direct,
    /// N/S/E/W 移動航點，`heading` 是相對於船的航點
    Waypoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    pub mode: Mode,
    pub position: Vector,
    pub heading: Vector,
}

impl Navigator {
    pub fn new(mode: Mode, heading: Vector) -> Self {
        Self {
            mode,
            position: Vector::default(),
            heading,
        }
    }

    pub fn apply(&mut self, action: Action) -> Result<()> {
        let moved = match (action, self.mode) {
            (Action::Shift(delta), Mode::Direct) => {
                self.position.add(delta, 1).map(|p| self.position = p)
            }
            (Action::Shift(delta), Mode::Waypoint) => {
                self.heading.add(delta, 1).map(|h| self.heading = h)
            }
            (Action::Turn(quarters), _) => {
                self.heading.rotate_clockwise(quarters).map(|h| self.heading = h)
            }
            (Action::Forward(times), _) => {
                self.position.add(self.heading, times).map(|p| self.position = p)
            }
        };
        moved.ok_or_else(|| {
            SolveError::evaluation(DAY, format!("{:?} moves the ship out of i64 range", action))
        })
    }

    pub fn follow(mut self, actions: &[Action]) -> Result<Self> {
        for action in actions {
            self.apply(*action)?;
        }
        Ok(self)
    }
}

fn parse_actions(input: &str) -> Result<Vec<Action>> {
    numbered_lines(input)
        .map(|(line_no, line)| Action::parse(line_no, line))
        .collect()
}
