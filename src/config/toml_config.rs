use crate::domain::model::StockLimits;
use crate::utils::error::{BeerStockError, Result};
use crate::utils::validation::{validate_path, validate_range};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "./data/beers.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StockConfig {
    pub store: StoreConfig,
    pub limits: StockLimits,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub data_file: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

impl StoreConfig {
    /// Splits `data_file` into the directory a storage is rooted at and the
    /// key of the document inside it.
    pub fn location(&self) -> Result<(PathBuf, String)> {
        let path = Path::new(&self.data_file);
        let key = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| BeerStockError::Config {
                message: format!("store.data_file '{}' has no file name", self.data_file),
            })?
            .to_string();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok((dir, key))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl StockConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BeerStockError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BEER_STOCK_DIR})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BeerStockError::Config {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("store.data_file", &self.store.data_file)?;
        validate_range("limits.max_stock", self.limits.max_stock, 1, u32::MAX)?;
        validate_range(
            "limits.max_initial_quantity",
            self.limits.max_initial_quantity,
            0,
            self.limits.max_stock,
        )?;
        Ok(())
    }
}
