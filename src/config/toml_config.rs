use crate::config::OutputFormat;
use crate::utils::error::{GuideError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_single_symbol, validate_single_word, validate_unit_price,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuideConfig {
    #[serde(default)]
    pub output: OutputConfig,
    /// 預先定義的別名, 例如 glob = "I"
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    /// 預先定義的單價
    #[serde(default)]
    pub prices: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    " -> ".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            separator: default_separator(),
        }
    }
}

impl GuideConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GuideError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GuideError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GLOB_SYMBOL})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("env var pattern must compile");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("output.separator", &self.output.separator)?;

        for (alias, token) in &self.aliases {
            let field = format!("aliases.{}", alias);
            validate_single_word(&field, alias)?;
            validate_single_symbol(&field, token)?;
        }

        for (item, price) in &self.prices {
            let field = format!("prices.{}", item);
            if item.split_whitespace().count() != 1 {
                return Err(GuideError::InvalidConfigValueError {
                    field,
                    value: item.clone(),
                    reason: "Item names must be a single word".to_string(),
                });
            }
            validate_unit_price(&field, *price)?;
        }

        Ok(())
    }
}

impl Validate for GuideConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
