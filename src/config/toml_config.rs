use crate::core::timers::{Timer, DEFAULT_LABEL, DEFAULT_PRECISION};
use crate::utils::error::{Result, ToolsError};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

const MAX_PRECISION: usize = 9;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub logging: LogConfig,
    pub timer: TimerConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub verbose: bool,
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub label: String,
    pub precision: usize,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl TimerConfig {
    pub fn build(&self) -> Timer {
        Timer::new(self.label.clone()).with_precision(self.precision)
    }
}

impl ToolsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ToolsError::from_io(path.as_ref(), e))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置並驗證
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        let config: Self =
            toml::from_str(&processed_content).map_err(|e| ToolsError::ConfigError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${TIMER_LABEL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for ToolsConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("timer.label", &self.timer.label)?;
        validate_range("timer.precision", self.timer.precision, 0, MAX_PRECISION)?;
        Ok(())
    }
}
