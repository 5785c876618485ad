pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod puzzles;
pub mod utils;

pub use adapters::http::{FetchingInputStore, InputFetcher};
pub use adapters::storage::{LocalInputStore, LocalStorage};
pub use config::CliConfig;
pub use core::{engine::SolverEngine, pipeline::SolvePipeline};
pub use puzzles::PuzzleRegistry;
pub use utils::error::{Result, SolveError};
