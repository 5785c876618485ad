use crate::adapters::http::DEFAULT_BASE_URL;
use crate::config::{parts_from_numbers, resolve_session};
use crate::domain::model::Part;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SolveError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub run: RunConfig,
    pub inputs: InputsConfig,
    pub report: ReportConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub days: Vec<u8>,
    pub parts: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputsConfig {
    pub dir: String,
    pub fetch: bool,
    #[serde(skip_serializing)]
    pub session: Option<String>,
    pub base_url: String,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            dir: "./inputs".to_string(),
            fetch: false,
            session: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output_path: String,
    pub formats: Vec<String>,
    pub archive: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: "./output".to_string(),
            formats: Vec::new(),
            archive: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
    pub json_logs: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| SolveError::ConfigError {
                message: format!("cannot read {}: {}", path.as_ref().display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SolveError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${AOC_SESSION})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SolveError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.json_logs)
            .unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn days(&self) -> Vec<u8> {
        self.run.days.clone()
    }

    fn parts(&self) -> Vec<Part> {
        parts_from_numbers(&self.run.parts)
    }

    fn inputs_dir(&self) -> &str {
        &self.inputs.dir
    }

    fn output_path(&self) -> &str {
        &self.report.output_path
    }

    fn report_formats(&self) -> &[String] {
        &self.report.formats
    }

    fn archive_report(&self) -> bool {
        self.report.archive
    }

    fn fetch_missing(&self) -> bool {
        self.inputs.fetch
    }

    fn session_token(&self) -> Option<String> {
        resolve_session(self.inputs.session.as_deref())
    }

    fn base_url(&self) -> &str {
        &self.inputs.base_url
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        for day in &self.run.days {
            validation::validate_range("run.days", *day, 1, 25)?;
        }
        for part in &self.run.parts {
            validation::validate_range("run.parts", *part, 1, 2)?;
        }

        validation::validate_path("inputs.dir", &self.inputs.dir)?;
        validation::validate_path("report.output_path", &self.report.output_path)?;
        validation::validate_formats("report.formats", &self.report.formats)?;

        if self.inputs.fetch {
            validation::validate_url("inputs.base_url", &self.inputs.base_url)?;
            validation::validate_required_field("inputs.session", &self.session_token())?;
        }

        Ok(())
    }
}
