//! Day 17: Conway Cubes

use super::numbered_lines;
use crate::domain::model::Answer;
use crate::domain::ports::Puzzle;
use crate::utils::error::{Result, SolveError};
use std::collections::{HashMap, HashSet};

const DAY: u8 = 17;
const BOOT_CYCLES: usize = 6;

pub struct ConwayCubes;

impl Puzzle for ConwayCubes {
    fn day(&self) -> u8 {
        DAY
    }

    fn title(&self) -> &'static str {
        "Conway Cubes"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        let mut dimension = PocketDimension::<3>::parse(input)?;
        dimension.run(BOOT_CYCLES);
        Ok(dimension.active_count().into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        let mut dimension = PocketDimension::<4>::parse(input)?;
        dimension.run(BOOT_CYCLES);
        Ok(dimension.active_count().into())
    }
}

pub type Coord<const N: usize> = [i32; N];

/// 無邊界的 N 維空間，只記錄啟動中的方塊
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PocketDimension<const N: usize> {
    active: HashSet<Coord<N>>,
    offsets: Vec<Coord<N>>,
}

impl<const N: usize> PocketDimension<N> {
    /// 初始切片放在其餘座標皆為 0 的平面上
    pub fn parse(input: &str) -> Result<Self> {
        let mut active = HashSet::new();

        for (y, (line_no, line)) in numbered_lines(input).enumerate() {
            for (x, c) in line.chars().enumerate() {
                match c {
                    '#' => {
                        let mut coord = [0; N];
                        coord[0] = x as i32;
                        if N > 1 {
                            coord[1] = y as i32;
                        }
                        active.insert(coord);
                    }
                    '.' => {}
                    other => {
                        return Err(SolveError::parse(
                            DAY,
                            line_no,
                            format!("unexpected cube state '{}'", other),
                        ))
                    }
                }
            }
        }

        Ok(Self::with_active(active))
    }

    pub fn with_active(active: HashSet<Coord<N>>) -> Self {
        Self {
            active,
            offsets: neighbour_offsets::<N>(),
        }
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_active(&self, coord: &Coord<N>) -> bool {
        self.active.contains(coord)
    }

    /// 所有方塊同時更新：啟動中且鄰居 2 或 3 個保持啟動；未啟動且鄰居恰好 3 個則啟動
    pub fn cycle(&mut self) {
        let mut counts: HashMap<Coord<N>, usize> = HashMap::new();
        for cube in &self.active {
            for offset in &self.offsets {
                let mut neighbour = *cube;
                for (axis, delta) in neighbour.iter_mut().zip(offset) {
                    *axis += delta;
                }
                *counts.entry(neighbour).or_insert(0) += 1;
            }
        }

        let next: HashSet<Coord<N>> = counts
            .into_iter()
            .filter(|(coord, count)| *count == 3 || (*count == 2 && self.active.contains(coord)))
            .map(|(coord, _)| coord)
            .collect();
        self.active = next;
    }

    pub fn run(&mut self, cycles: usize) {
        for cycle in 1..=cycles {
            self.cycle();
            tracing::debug!(
                "{}-D cycle {}: {} active cubes",
                N,
                cycle,
                self.active.len()
            );
        }
    }
}

/// 每個座標差 -1..=1 的所有組合，扣除原點（3^N - 1 個）
fn neighbour_offsets<const N: usize>() -> Vec<Coord<N>> {
    let total = 3usize.pow(N as u32);
    (0..total)
        .map(|mut index| {
            let mut offset = [0; N];
            for axis in offset.iter_mut() {
                *axis = (index % 3) as i32 - 1;
                index /= 3;
            }
            offset
        })
        .filter(|offset| offset.iter().any(|d| *d != 0))
        .collect()
}
