//! Day 8: Handheld Halting

use super::{numbered_lines, parse_number};
use crate::domain::model::Answer;
use crate::domain::ports::Puzzle;
use crate::utils::error::{Result, SolveError};

const DAY: u8 = 8;

pub struct HandheldHalting;

impl Puzzle for HandheldHalting {
    fn day(&self) -> u8 {
        DAY
    }

    fn title(&self) -> &'static str {
        "Handheld Halting"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        let program = Program::parse(input)?;
        match program.run()? {
            Halt::Looped(acc) => Ok(acc.into()),
            other => Err(SolveError::no_solution(
                DAY,
                format!("program did not loop: {:?}", other),
            )),
        }
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        Program::parse(input)?
            .repair()?
            .map(Answer::from)
            .ok_or_else(|| SolveError::no_solution(DAY, "no single jmp/nop swap terminates"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Acc(i64),
    Jmp(i64),
    Nop(i64),
}

impl Instruction {
    pub fn parse(line_no: usize, line: &str) -> Result<Self> {
        let (op, arg) = line
            .split_once(' ')
            .ok_or_else(|| SolveError::parse(DAY, line_no, "expected '<op> <arg>'"))?;
        let arg: i64 = parse_number(DAY, line_no, arg)?;

        match op {
            "acc" => Ok(Instruction::Acc(arg)),
            "jmp" => Ok(Instruction::Jmp(arg)),
            "nop" => Ok(Instruction::Nop(arg)),
            other => Err(SolveError::parse(
                DAY,
                line_no,
                format!("unknown operation '{}'", other),
            )),
        }
    }

    /// jmp 與 nop 互換；acc 沒有對應
    fn swapped(self) -> Option<Self> {
        match self {
            Instruction::Jmp(arg) => Some(Instruction::Nop(arg)),
            Instruction::Nop(arg) => Some(Instruction::Jmp(arg)),
            Instruction::Acc(_) => None,
        }
    }
}

/// 程式停止的原因與當下累加器的值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// 即將第二次執行同一指令
    Looped(i64),
    /// 跳到最後一行的下一行
    Terminated(i64),
    OutOfBounds { pc: i64, acc: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let instructions = numbered_lines(input)
            .map(|(line_no, line)| Instruction::parse(line_no, line))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(instructions))
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn run(&self) -> Result<Halt> {
        self.run_patched(None)
    }

    fn run_patched(&self, patch: Option<(usize, Instruction)>) -> Result<Halt> {
        let end = self.instructions.len() as i64;
        let mut visited = vec![false; self.instructions.len()];
        let mut acc = 0i64;
        let mut pc = 0i64;

        loop {
            if pc == end {
                return Ok(Halt::Terminated(acc));
            }
            if pc < 0 || pc > end {
                return Ok(Halt::OutOfBounds { pc, acc });
            }

            let index = pc as usize;
            if visited[index] {
                return Ok(Halt::Looped(acc));
            }
            visited[index] = true;

            let instruction = match patch {
                Some((at, replacement)) if at == index => replacement,
                _ => self.instructions[index],
            };
            let overflow = || {
                SolveError::evaluation(
                    DAY,
                    format!("{:?} at line {} overflows i64", instruction, index + 1),
                )
            };
            match instruction {
                Instruction::Acc(arg) => {
                    acc = acc.checked_add(arg).ok_or_else(overflow)?;
                    pc += 1;
                }
                Instruction::Jmp(arg) => pc = pc.checked_add(arg).ok_or_else(overflow)?,
                Instruction::Nop(_) => pc += 1,
            }
        }
    }

    /// 由上而下逐一嘗試互換單一 jmp/nop，回傳第一個正常結束的累加器值
    pub fn repair(&self) -> Result<Option<i64>> {
        let patches = self
            .instructions
            .iter()
            .enumerate()
            .filter_map(|(i, instruction)| instruction.swapped().map(|s| (i, s)));

        for patch in patches {
            if let Halt::Terminated(acc) = self.run_patched(Some(patch))? {
                tracing::debug!("Program terminates after patching line {}", patch.0 + 1);
                return Ok(Some(acc));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "nop +0
acc +1
jmp +4
acc +3
jmp -3
acc -99
acc +1
jmp -4
acc +6
";

    #[test]
    fn test_parse_instruction() {
        assert_eq!(Instruction::parse(1, "acc +7").unwrap(), Instruction::Acc(7));
        assert_eq!(Instruction::parse(1, "jmp -20").unwrap(), Instruction::Jmp(-20));
        assert!(Instruction::parse(1, "mul +2").is_err());
        assert!(Instruction::parse(1, "nop").is_err());
    }

    #[test]
    fn test_loop_detection() {
        let program = Program::parse(EXAMPLE).unwrap();
        assert_eq!(program.len(), 9);
        assert_eq!(program.run().unwrap(), Halt::Looped(5));
        assert_eq!(HandheldHalting.part_one(EXAMPLE).unwrap(), Answer::Number(5));
    }

    #[test]
    fn test_repair() {
        assert_eq!(HandheldHalting.part_two(EXAMPLE).unwrap(), Answer::Number(8));
    }

    #[test]
    fn test_repair_leaves_program_untouched() {
        let program = Program::parse(EXAMPLE).unwrap();
        let before = program.clone();
        program.repair().unwrap();
        assert_eq!(program, before);
    }

    #[test]
    fn test_out_of_bounds_jump() {
        let program = Program::parse("acc +2\njmp +5\n").unwrap();
        assert_eq!(program.run().unwrap(), Halt::OutOfBounds { pc: 6, acc: 2 });
    }

    #[test]
    fn test_terminating_program_has_no_loop() {
        let err = HandheldHalting.part_one("acc +1\nacc +2\n").unwrap_err();
        assert!(matches!(err, SolveError::NoSolution { day: 8, .. }));
    }

    #[test]
    fn test_accumulator_overflow_is_an_error() {
        let err = HandheldHalting
            .part_one("acc +9223372036854775807\nacc +1\n")
            .unwrap_err();
        assert!(matches!(err, SolveError::EvaluationError { day: 8, .. }));
    }

    #[test]
    fn test_jump_overflow_is_an_error() {
        let program = Program::parse("nop +0\njmp +9223372036854775807\n").unwrap();
        assert!(matches!(
            program.run(),
            Err(SolveError::EvaluationError { day: 8, .. })
        ));
    }
}
