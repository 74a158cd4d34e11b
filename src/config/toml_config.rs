use crate::domain::ports::{
    ConfigProvider, DEFAULT_REQUEST_TIMEOUT, DEFAULT_STATUS_RESET_DELAY,
    DEFAULT_SUBMISSION_ENDPOINT,
};
use crate::utils::error::{HomecareError, Result};
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub submission: SubmissionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    pub endpoint: String,
    pub request_timeout_seconds: u64,
    pub reset_delay_ms: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SUBMISSION_ENDPOINT.to_string(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT.as_secs(),
            reset_delay_ms: DEFAULT_STATUS_RESET_DELAY.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub json: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HomecareError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| HomecareError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SUBMISSION_ENDPOINT})；未設定者保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("submission.endpoint", &self.submission.endpoint)?;
        validate_positive_number(
            "submission.request_timeout_seconds",
            self.submission.request_timeout_seconds,
            1,
        )?;
        validate_range("submission.reset_delay_ms", self.submission.reset_delay_ms, 1, 600_000)?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn submission_endpoint(&self) -> &str {
        &self.submission.endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.submission.request_timeout_seconds)
    }

    fn status_reset_delay(&self) -> Duration {
        Duration::from_millis(self.submission.reset_delay_ms)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
