use crate::utils::error::{RecordsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// 紀錄轉換器的設定；目前只有 `required_fields` 有意義，其餘鍵保留在 `extra`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordConfig {
    #[serde(default)]
    pub required_fields: Vec<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl RecordConfig {
    pub fn with_required_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required_fields: fields.into_iter().map(Into::into).collect(),
            extra: HashMap::new(),
        }
    }

    /// 從檔案載入配置；`.toml` 副檔名以 TOML 解析，其他一律視為 JSON
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        serde_json::from_str(&processed_content).map_err(|e| RecordsError::ConfigValidationError {
            field: "json_parsing".to_string(),
            message: format!("JSON parsing error: {}", e),
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RecordsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// 替換環境變數 (例如 ${ID_FIELD})，未設定的變數保持原樣
fn substitute_env_vars(content: &str) -> Result<String> {
    use regex::Regex;

    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RecordsError::ConfigError {
        message: format!("Invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}
