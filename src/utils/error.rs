use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Input download failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration '{field}'")]
    MissingConfigError { field: String },

    #[error("Day {day} line {line}: {message}")]
    ParseError {
        day: u8,
        line: usize,
        message: String,
    },

    #[error("Day {day}: {message}")]
    EvaluationError { day: u8, message: String },

    #[error("Day {day}: no solution found ({message})")]
    NoSolution { day: u8, message: String },

    #[error("No puzzle registered for day {day}")]
    UnknownDay { day: u8 },

    #[error("Input for day {day} not found at {path}")]
    InputNotFound { day: u8, path: String },

    #[error("Could not read input for day {day} at {path}: {source}")]
    InputReadError {
        day: u8,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Fetching input for day {day} returned HTTP {status}")]
    FetchError { day: u8, status: u16 },
}

pub type Result<T> = std::result::Result<T, SolveError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Network,
    Puzzle,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SolveError {
    pub fn parse(day: u8, line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            day,
            line,
            message: message.into(),
        }
    }

    pub fn no_solution(day: u8, message: impl Into<String>) -> Self {
        Self::NoSolution {
            day,
            message: message.into(),
        }
    }

    pub fn evaluation(day: u8, message: impl Into<String>) -> Self {
        Self::EvaluationError {
            day,
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SolveError::ConfigError { .. }
            | SolveError::ConfigValidationError { .. }
            | SolveError::InvalidConfigValueError { .. }
            | SolveError::MissingConfigError { .. }
            | SolveError::UnknownDay { .. } => ErrorCategory::Configuration,
            SolveError::InputNotFound { .. }
            | SolveError::InputReadError { .. }
            | SolveError::ParseError { .. } => ErrorCategory::Input,
            SolveError::HttpError(_) | SolveError::FetchError { .. } => ErrorCategory::Network,
            SolveError::EvaluationError { .. } | SolveError::NoSolution { .. } => {
                ErrorCategory::Puzzle
            }
            SolveError::ZipError(_)
            | SolveError::CsvError(_)
            | SolveError::IoError(_)
            | SolveError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Input | ErrorCategory::Puzzle => {
                ErrorSeverity::High
            }
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SolveError::InputNotFound { day, .. } => format!(
                "Save the puzzle input as inputs/day_{:02}/input.txt, pass --input, or run with --fetch",
                day
            ),
            SolveError::InputReadError { path, .. } => {
                format!("Check that {} is a readable file", path)
            }
            SolveError::UnknownDay { .. } => {
                "Run without --day to list and solve every available puzzle".to_string()
            }
            SolveError::ParseError { .. } => {
                "Check that the input file was copied completely and unmodified".to_string()
            }
            SolveError::MissingConfigError { field } => {
                format!("Provide '{}' in the config file or on the command line", field)
            }
            SolveError::FetchError { status, .. } if *status == 400 || *status == 401 => {
                "The session token looks expired; copy a fresh one from the browser cookie".to_string()
            }
            SolveError::HttpError(_) | SolveError::FetchError { .. } => {
                "Check the network connection and base URL, then retry".to_string()
            }
            SolveError::NoSolution { .. } | SolveError::EvaluationError { .. } => {
                "Make sure the input belongs to the selected day".to_string()
            }
            SolveError::ConfigError { .. }
            | SolveError::ConfigValidationError { .. }
            | SolveError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again".to_string()
            }
            SolveError::ZipError(_)
            | SolveError::CsvError(_)
            | SolveError::IoError(_)
            | SolveError::SerializationError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Input => format!("Could not read puzzle input: {}", self),
            ErrorCategory::Network => format!("Could not download puzzle input: {}", self),
            ErrorCategory::Puzzle => format!("Puzzle could not be solved: {}", self),
            ErrorCategory::Output => format!("Could not write results: {}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = SolveError::parse(2, 7, "missing ':'");
        assert_eq!(err.to_string(), "Day 2 line 7: missing ':'");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_fetch_error_suggestion() {
        let err = SolveError::FetchError { day: 1, status: 400 };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("session token"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: SolveError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().starts_with("Could not write results"));
    }

    #[test]
    fn test_input_read_error_is_an_input_problem() {
        let err = SolveError::InputReadError {
            day: 8,
            path: "inputs/day_08/input.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().starts_with("Could not read puzzle input"));
        assert!(err.recovery_suggestion().contains("inputs/day_08/input.txt"));
    }
}
