use crate::utils::error::{RecordsError, Result};
use crate::utils::validation::Validate;
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaConfig {
    pub table_name: String,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 以任意查詢函式讀取設定，方便測試時不必修改行程環境變數
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            table_name: non_empty("TABLE_NAME").ok_or_else(|| RecordsError::MissingConfigError {
                field: "TABLE_NAME".to_string(),
            })?,
            region: non_empty("DYNAMODB_REGION").or_else(|| non_empty("AWS_REGION")),
            endpoint_url: non_empty("DYNAMODB_ENDPOINT"),
        })
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_table_name("table_name", &self.table_name)?;

        if let Some(region) = &self.region {
            validate_aws_region("region", region)?;
        }

        if let Some(endpoint) = &self.endpoint_url {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(RecordsError::InvalidConfigValueError {
                    field: "endpoint_url".to_string(),
                    value: endpoint.clone(),
                    reason: "Endpoint must use http or https".to_string(),
                });
            }
        }

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

fn validate_aws_region(field_name: &str, region: &str) -> Result<()> {
    use crate::utils::validation::validate_non_empty_string;

    validate_non_empty_string(field_name, region)?;

    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(RecordsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: region.to_string(),
            reason: "AWS region can only contain lowercase letters, numbers, and hyphens"
                .to_string(),
        });
    }

    Ok(())
}
