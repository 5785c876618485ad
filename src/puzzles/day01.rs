//! Day 1: Report Repair

use super::{numbered_lines, parse_number};
use crate::domain::model::Answer;
use crate::domain::ports::Puzzle;
use crate::utils::error::{Result, SolveError};

const DAY: u8 = 1;
const TARGET_SUM: i64 = 2020;

pub struct ReportRepair;

impl Puzzle for ReportRepair {
    fn day(&self) -> u8 {
        DAY
    }

    fn title(&self) -> &'static str {
        "Report Repair"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        product_of_entries(&parse_entries(input)?, 2).map(Answer::from)
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        product_of_entries(&parse_entries(input)?, 3).map(Answer::from)
    }
}

fn parse_entries(input: &str) -> Result<Vec<i64>> {
    numbered_lines(input)
        .map(|(line, text)| parse_number(DAY, line, text))
        .collect()
}

/// 找出 `count` 個總和為 2020 的項目並回傳乘積
pub fn product_of_entries(entries: &[i64], count: usize) -> Result<i64> {
    let mut chosen = Vec::with_capacity(count);
    if find_combination(entries, count, i128::from(TARGET_SUM), 0, &mut chosen) {
        chosen
            .iter()
            .try_fold(1i64, |acc, entry| acc.checked_mul(*entry))
            .ok_or_else(|| {
                SolveError::evaluation(DAY, format!("product of {:?} overflows i64", chosen))
            })
    } else {
        Err(SolveError::no_solution(
            DAY,
            format!("no {} entries sum to {}", count, TARGET_SUM),
        ))
    }
}

// 依輸入順序枚舉組合，第一個符合的組合即為答案；差額以 i128 計算不會溢位
fn find_combination(
    entries: &[i64],
    count: usize,
    remaining: i128,
    start: usize,
    chosen: &mut Vec<i64>,
) -> bool {
    if count == 0 {
        return remaining == 0;
    }

    for i in start..entries.len() {
        chosen.push(entries[i]);
        if find_combination(
            entries,
            count - 1,
            remaining - i128::from(entries[i]),
            i + 1,
            chosen,
        ) {
            return true;
        }
        chosen.pop();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "1721\n979\n366\n299\n675\n1456\n";

    #[test]
    fn test_part_one_example() {
        assert_eq!(ReportRepair.part_one(EXAMPLE).unwrap(), Answer::Number(514579));
    }

    #[test]
    fn test_part_two_example() {
        assert_eq!(ReportRepair.part_two(EXAMPLE).unwrap(), Answer::Number(241861950));
    }

    #[test]
    fn test_entry_is_not_reused() {
        // 1010 + 1010 would need the same entry twice
        assert!(matches!(
            product_of_entries(&[1010, 5, 7], 2),
            Err(SolveError::NoSolution { day: 1, .. })
        ));
        assert_eq!(product_of_entries(&[1010, 5, 1010], 2).unwrap(), 1010 * 1010);
    }

    #[test]
    fn test_invalid_entry() {
        let err = ReportRepair.part_one("1721\nabc\n").unwrap_err();
        assert!(matches!(err, SolveError::ParseError { day: 1, line: 2, .. }));
    }

    #[test]
    fn test_product_overflow_is_an_error() {
        let err = ReportRepair
            .part_one("4000000000000000000\n-3999999999999997980\n")
            .unwrap_err();
        assert!(matches!(err, SolveError::EvaluationError { day: 1, .. }));
    }

    #[test]
    fn test_extreme_entries_do_not_overflow_the_search() {
        let entries = [i64::MIN, i64::MAX, 2019, 1];
        assert_eq!(product_of_entries(&entries, 2).unwrap(), 2019);
        assert_eq!(product_of_entries(&[i64::MIN, 1, 2019, 0], 3).unwrap(), 0);
    }
}
