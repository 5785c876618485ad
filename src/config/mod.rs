pub mod toml_config;

use crate::adapters::http::DEFAULT_BASE_URL;
use crate::domain::model::Part;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SolveError};
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const SESSION_ENV_VAR: &str = "AOC_SESSION";

#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "advent-2020"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Solve Advent of Code 2020 puzzles from local input files")
)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Days to solve (comma separated); all available puzzles when omitted
    #[cfg_attr(feature = "cli", arg(short, long, value_delimiter = ','))]
    pub day: Vec<u8>,

    /// Parts to solve (1, 2 or both)
    #[cfg_attr(feature = "cli", arg(short, long, value_delimiter = ','))]
    pub part: Vec<u8>,

    /// Input file for the single selected day
    #[cfg_attr(feature = "cli", arg(long))]
    pub input: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./inputs"))]
    pub inputs_dir: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./output"))]
    pub output_path: String,

    /// Report formats to write into the output path (csv, tsv, json)
    #[cfg_attr(feature = "cli", arg(long, value_delimiter = ','))]
    pub formats: Vec<String>,

    /// Bundle report files into answers.zip
    #[cfg_attr(feature = "cli", arg(long))]
    pub archive: bool,

    /// Download missing inputs using the session cookie
    #[cfg_attr(feature = "cli", arg(long))]
    pub fetch: bool,

    /// Session cookie value; falls back to the AOC_SESSION environment variable
    #[cfg_attr(feature = "cli", arg(long))]
    #[serde(skip_serializing)]
    pub session: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_BASE_URL))]
    pub base_url: String,

    /// List available puzzles and exit
    #[cfg_attr(feature = "cli", arg(long))]
    pub list: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Log CPU and memory usage per stage"))]
    pub monitor: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON lines"))]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            day: Vec::new(),
            part: Vec::new(),
            input: None,
            inputs_dir: "./inputs".to_string(),
            output_path: "./output".to_string(),
            formats: Vec::new(),
            archive: false,
            fetch: false,
            session: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            list: false,
            verbose: false,
            monitor: false,
            json_logs: false,
        }
    }
}

/// 未指定 part 時兩部分都解
pub(crate) fn parts_from_numbers(numbers: &[u8]) -> Vec<Part> {
    if numbers.is_empty() {
        return Part::ALL.to_vec();
    }
    let mut parts: Vec<Part> = numbers
        .iter()
        .filter_map(|n| Part::try_from(*n).ok())
        .collect();
    parts.sort();
    parts.dedup();
    parts
}

/// `${VAR}` 未被替換時視為未設定
pub(crate) fn resolve_session(configured: Option<&str>) -> Option<String> {
    configured
        .filter(|s| !s.trim().is_empty() && !s.starts_with("${"))
        .map(str::to_string)
        .or_else(|| std::env::var(SESSION_ENV_VAR).ok())
        .filter(|s| !s.trim().is_empty())
}

impl ConfigProvider for CliConfig {
    fn days(&self) -> Vec<u8> {
        self.day.clone()
    }

    fn parts(&self) -> Vec<Part> {
        parts_from_numbers(&self.part)
    }

    fn inputs_dir(&self) -> &str {
        &self.inputs_dir
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn report_formats(&self) -> &[String] {
        &self.formats
    }

    fn archive_report(&self) -> bool {
        self.archive
    }

    fn fetch_missing(&self) -> bool {
        self.fetch
    }

    fn session_token(&self) -> Option<String> {
        resolve_session(self.session.as_deref())
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        for day in &self.day {
            validation::validate_range("day", *day, 1, 25)?;
        }
        for part in &self.part {
            validation::validate_range("part", *part, 1, 2)?;
        }

        if let Some(input) = &self.input {
            validation::validate_path("input", input)?;
            if self.day.len() != 1 {
                return Err(SolveError::ConfigValidationError {
                    field: "input".to_string(),
                    message: "--input needs exactly one --day".to_string(),
                });
            }
        }

        validation::validate_path("inputs_dir", &self.inputs_dir)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_formats("formats", &self.formats)?;

        if self.fetch {
            validation::validate_url("base_url", &self.base_url)?;
            validation::validate_required_field("session", &self.session_token())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parts() {
        let config = CliConfig::default();
        assert_eq!(config.parts(), vec![Part::One, Part::Two]);

        let config = CliConfig {
            part: vec![2, 2],
            ..CliConfig::default()
        };
        assert_eq!(config.parts(), vec![Part::Two]);
    }

    #[test]
    fn test_validate_day_range() {
        let config = CliConfig {
            day: vec![1, 26],
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_input_needs_single_day() {
        let config = CliConfig {
            input: Some("input.txt".to_string()),
            ..CliConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SolveError::ConfigValidationError { .. })
        ));

        let config = CliConfig {
            day: vec![5],
            input: Some("input.txt".to_string()),
            ..CliConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fetch_with_explicit_session() {
        let config = CliConfig {
            fetch: true,
            session: Some("cookie".to_string()),
            ..CliConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.session_token().as_deref(), Some("cookie"));
    }

    #[test]
    fn test_unresolved_placeholder_is_not_a_session() {
        assert_eq!(
            resolve_session(Some("${SOME_UNSET_VARIABLE_FOR_TEST}"))
                .filter(|s| s.starts_with("${")),
            None
        );
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_cli_args() {
        let config = CliConfig::parse_from([
            "advent-2020",
            "--day",
            "8,11",
            "--part",
            "2",
            "--formats",
            "csv,json",
            "--archive",
        ]);
        assert_eq!(config.day, vec![8, 11]);
        assert_eq!(config.parts(), vec![Part::Two]);
        assert_eq!(config.formats, vec!["csv", "json"]);
        assert!(config.archive);
        assert_eq!(config.inputs_dir, "./inputs");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
