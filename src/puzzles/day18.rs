//! Day 18: Operation Order

use super::numbered_lines;
use crate::domain::model::Answer;
use crate::domain::ports::Puzzle;
use crate::utils::error::{Result, SolveError};
use std::iter::Peekable;
use std::vec::IntoIter;
use thiserror::Error;

const DAY: u8 = 18;

pub struct OperationOrder;

impl Puzzle for OperationOrder {
    fn day(&self) -> u8 {
        DAY
    }

    fn title(&self) -> &'static str {
        "Operation Order"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        sum_of_lines(input, Precedence::LEFT_TO_RIGHT).map(Answer::from)
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        sum_of_lines(input, Precedence::ADDITION_FIRST).map(Answer::from)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("expected a number or '(' but found {0}")]
    ExpectedOperand(String),

    #[error("unmatched ')'")]
    UnmatchedClose,

    #[error("missing ')'")]
    MissingClose,

    #[error("expected an operator but found {0}")]
    ExpectedOperator(String),

    #[error("number '{0}' is too large")]
    NumberTooLarge(String),

    #[error("result overflows i64")]
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Multiply,
}

impl Operator {
    fn apply(self, lhs: i64, rhs: i64) -> std::result::Result<i64, ExpressionError> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
        }
        .ok_or(ExpressionError::Overflow)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Number(i64),
    Op(Operator),
    Open,
    Close,
}

impl Token {
    fn describe(token: Option<&Token>) -> String {
        match token {
            Some(Token::Number(n)) => n.to_string(),
            Some(Token::Op(Operator::Add)) => "'+'".to_string(),
            Some(Token::Op(Operator::Multiply)) => "'*'".to_string(),
            Some(Token::Open) => "'('".to_string(),
            Some(Token::Close) => "')'".to_string(),
            None => "end of line".to_string(),
        }
    }
}

/// 運算子優先順序，數字越大越先計算
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precedence {
    pub add: u8,
    pub multiply: u8,
}

impl Precedence {
    /// 加乘同級，由左至右
    pub const LEFT_TO_RIGHT: Precedence = Precedence { add: 1, multiply: 1 };
    /// 加法先於乘法
    pub const ADDITION_FIRST: Precedence = Precedence { add: 2, multiply: 1 };

    fn of(&self, op: Operator) -> u8 {
        match op {
            Operator::Add => self.add,
            Operator::Multiply => self.multiply,
        }
    }
}

pub fn tokenize(line: &str) -> std::result::Result<Vec<Token>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            ' ' | '\t' => {}
            '+' => tokens.push(Token::Op(Operator::Add)),
            '*' => tokens.push(Token::Op(Operator::Multiply)),
            '(' => tokens.push(Token::Open),
            ')' => tokens.push(Token::Close),
            '0'..='9' => {
                let mut end = start + 1;
                while let Some((i, d)) = chars.peek().copied() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    end = i + 1;
                    chars.next();
                }
                let digits = &line[start..end];
                let value = digits
                    .parse()
                    .map_err(|_| ExpressionError::NumberTooLarge(digits.to_string()))?;
                tokens.push(Token::Number(value));
            }
            other => return Err(ExpressionError::UnexpectedChar(other)),
        }
    }
    Ok(tokens)
}

pub fn evaluate(line: &str, precedence: Precedence) -> std::result::Result<i64, ExpressionError> {
    let mut evaluator = Evaluator {
        tokens: tokenize(line)?.into_iter().peekable(),
        precedence,
    };
    let value = evaluator.expression(0)?;
    match evaluator.tokens.next() {
        None => Ok(value),
        Some(Token::Close) => Err(ExpressionError::UnmatchedClose),
        Some(other) => Err(ExpressionError::ExpectedOperator(Token::describe(Some(&other)))),
    }
}

struct Evaluator {
    tokens: Peekable<IntoIter<Token>>,
    precedence: Precedence,
}

impl Evaluator {
    // precedence climbing：同級運算子左結合
    fn expression(&mut self, min_precedence: u8) -> std::result::Result<i64, ExpressionError> {
        let mut lhs = self.operand()?;

        while let Some(Token::Op(op)) = self.tokens.peek().copied() {
            let level = self.precedence.of(op);
            if level < min_precedence {
                break;
            }
            self.tokens.next();
            let rhs = self.expression(level + 1)?;
            lhs = op.apply(lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn operand(&mut self) -> std::result::Result<i64, ExpressionError> {
        match self.tokens.next() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::Open) => {
                let value = self.expression(0)?;
                match self.tokens.next() {
                    Some(Token::Close) => Ok(value),
                    None => Err(ExpressionError::MissingClose),
                    Some(other) => Err(ExpressionError::ExpectedOperator(Token::describe(Some(
                        &other,
                    )))),
                }
            }
            other => Err(ExpressionError::ExpectedOperand(Token::describe(
                other.as_ref(),
            ))),
        }
    }
}

fn sum_of_lines(input: &str, precedence: Precedence) -> Result<i64> {
    numbered_lines(input).try_fold(0i64, |total, (line_no, line)| {
        let value = evaluate(line, precedence).map_err(|e| match e {
            ExpressionError::Overflow => SolveError::evaluation(DAY, format!("line {}: {}", line_no, e)),
            other => SolveError::parse(DAY, line_no, other.to_string()),
        })?;
        total
            .checked_add(value)
            .ok_or_else(|| SolveError::evaluation(DAY, "sum of all lines overflows i64"))
    })
}
