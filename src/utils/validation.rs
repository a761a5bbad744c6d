use crate::utils::error::{RecordsError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RecordsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RecordsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[String],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        let extension = std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| RecordsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: file.clone(),
                reason: "File has no extension or invalid filename".to_string(),
            })?;

        if !allowed_set.contains(extension.to_ascii_lowercase().as_str()) {
            return Err(RecordsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: file.clone(),
                reason: format!(
                    "Unsupported file extension: {}. Allowed extensions: {}",
                    extension,
                    allowed_extensions.join(", ")
                ),
            });
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RecordsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RecordsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// DynamoDB 資料表名稱：3-255 字元，只允許英數字、底線、連字號與句點
pub fn validate_table_name(field_name: &str, table_name: &str) -> Result<()> {
    validate_non_empty_string(field_name, table_name)?;
    validate_range(field_name, table_name.len(), 3, 255)?;

    if !table_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
    {
        return Err(RecordsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: table_name.to_string(),
            reason: "Table name can only contain letters, numbers, underscores, hyphens, and dots"
                .to_string(),
        });
    }

    Ok(())
}
