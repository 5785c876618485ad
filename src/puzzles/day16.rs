//! Day 16: Ticket Translation

use super::parse_number;
use crate::domain::model::Answer;
use crate::domain::ports::Puzzle;
use crate::utils::error::{Result, SolveError};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

const DAY: u8 = 16;
const GOAL_FIELD_PREFIX: &str = "departure";

pub struct TicketTranslation;

impl Puzzle for TicketTranslation {
    fn day(&self) -> u8 {
        DAY
    }

    fn title(&self) -> &'static str {
        "Ticket Translation"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        let notes = Notes::parse(input)?;
        let error_rate = notes
            .nearby_tickets
            .iter()
            .flatten()
            .filter(|value| !notes.matches_any_rule(**value))
            .try_fold(0u64, |total, value| total.checked_add(*value))
            .and_then(|total| i64::try_from(total).ok())
            .ok_or_else(|| SolveError::evaluation(DAY, "ticket scanning error rate overflows i64"))?;
        Ok(Answer::Number(error_rate))
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        let notes = Notes::parse(input)?;
        let fields = notes.resolve_fields()?;

        let product = fields
            .iter()
            .zip(&notes.your_ticket)
            .filter(|(name, _)| name.starts_with(GOAL_FIELD_PREFIX))
            .try_fold(1i64, |acc, (_, value)| {
                i64::try_from(*value).ok().and_then(|v| acc.checked_mul(v))
            })
            .ok_or_else(|| SolveError::evaluation(DAY, "departure product overflows i64"))?;
        Ok(Answer::Number(product))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub name: String,
    pub ranges: Vec<RangeInclusive<u64>>,
}

impl FieldRule {
    /// `departure location: 49-258 or 268-955`
    pub fn parse(line_no: usize, line: &str) -> Result<Self> {
        let (name, ranges) = line
            .split_once(':')
            .ok_or_else(|| SolveError::parse(DAY, line_no, "rule needs 'name: ranges'"))?;

        let ranges = ranges
            .split(" or ")
            .map(|range| {
                let (from, to) = range.trim().split_once('-').ok_or_else(|| {
                    SolveError::parse(DAY, line_no, format!("invalid range '{}'", range.trim()))
                })?;
                Ok(parse_number(DAY, line_no, from)?..=parse_number(DAY, line_no, to)?)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: name.trim().to_string(),
            ranges,
        })
    }

    pub fn accepts(&self, value: u64) -> bool {
        self.ranges.iter().any(|r| r.contains(&value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notes {
    pub rules: Vec<FieldRule>,
    pub your_ticket: Vec<u64>,
    pub nearby_tickets: Vec<Vec<u64>>,
}

impl Notes {
    pub fn parse(input: &str) -> Result<Self> {
        let mut rules = Vec::new();
        let mut your_ticket = None;
        let mut nearby_tickets = Vec::new();
        let mut section = Section::Rules;
        let mut last_line = 1;

        for (index, raw) in input.lines().enumerate() {
            let line_no = index + 1;
            last_line = line_no;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            match (line, section) {
                ("your ticket:", _) => section = Section::YourTicket,
                ("nearby tickets:", _) => section = Section::NearbyTickets,
                (_, Section::Rules) => rules.push(FieldRule::parse(line_no, line)?),
                (_, Section::YourTicket) => {
                    if your_ticket.is_some() {
                        return Err(SolveError::parse(DAY, line_no, "more than one own ticket"));
                    }
                    your_ticket = Some(parse_ticket(line_no, line)?);
                }
                (_, Section::NearbyTickets) => nearby_tickets.push(parse_ticket(line_no, line)?),
            }
        }

        let your_ticket = your_ticket
            .ok_or_else(|| SolveError::parse(DAY, last_line, "missing 'your ticket:' section"))?;

        Ok(Self {
            rules,
            your_ticket,
            nearby_tickets,
        })
    }

    pub fn matches_any_rule(&self, value: u64) -> bool {
        self.rules.iter().any(|rule| rule.accepts(value))
    }

    pub fn is_valid_ticket(&self, ticket: &[u64]) -> bool {
        ticket.iter().all(|value| self.matches_any_rule(*value))
    }

    /// 以有效票券推算每個位置對應的欄位名稱
    pub fn resolve_fields(&self) -> Result<Vec<String>> {
        let width = self.your_ticket.len();
        let valid: Vec<&Vec<u64>> = self
            .nearby_tickets
            .iter()
            .filter(|ticket| self.is_valid_ticket(ticket))
            .collect();

        if let Some(ticket) = valid.iter().find(|t| t.len() != width) {
            return Err(SolveError::no_solution(
                DAY,
                format!("ticket has {} values, expected {}", ticket.len(), width),
            ));
        }

        // 每個位置可能的規則索引
        let mut candidates: Vec<BTreeSet<usize>> = (0..width)
            .map(|position| {
                self.rules
                    .iter()
                    .enumerate()
                    .filter(|(_, rule)| valid.iter().all(|t| rule.accepts(t[position])))
                    .map(|(i, _)| i)
                    .collect()
            })
            .collect();

        let mut resolved: Vec<Option<usize>> = vec![None; width];
        while resolved.iter().any(Option::is_none) {
            let fixed: Vec<(usize, usize)> = candidates
                .iter()
                .enumerate()
                .filter(|(position, c)| resolved[*position].is_none() && c.len() == 1)
                .filter_map(|(position, c)| c.first().map(|rule| (position, *rule)))
                .collect();

            if fixed.is_empty() {
                return Err(SolveError::no_solution(
                    DAY,
                    "field positions cannot be resolved unambiguously",
                ));
            }

            for (position, rule) in fixed {
                // 同一批中兩個位置只剩同一條規則時無解
                if let Some(taken) = resolved.iter().position(|r| *r == Some(rule)) {
                    return Err(SolveError::no_solution(
                        DAY,
                        format!(
                            "positions {} and {} both resolve to '{}'",
                            taken, position, self.rules[rule].name
                        ),
                    ));
                }
                resolved[position] = Some(rule);
                for (other, c) in candidates.iter_mut().enumerate() {
                    if other != position {
                        c.remove(&rule);
                    }
                }
            }
        }

        Ok(resolved
            .into_iter()
            .flatten()
            .map(|rule| self.rules[rule].name.clone())
            .collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Rules,
    YourTicket,
    NearbyTickets,
}

fn parse_ticket(line_no: usize, line: &str) -> Result<Vec<u64>> {
    line.split(',')
        .map(|value| parse_number(DAY, line_no, value))
        .collect()
}
