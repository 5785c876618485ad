pub mod engine;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{Answer, Day, Part, PuzzleInput, RunReport, Solution};
pub use crate::domain::ports::{ConfigProvider, InputStore, Pipeline, Puzzle, ReportStore};
pub use crate::utils::error::Result;
