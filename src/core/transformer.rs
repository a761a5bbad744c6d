//! Record validation and normalization.
//!
//! A record survives [`process`] only if it carries every field listed in
//! [`RecordConfig::required_fields`]. Survivors are normalized by
//! [`transform`]; dropped records are not reported anywhere.

use crate::config::record_config::RecordConfig;
use crate::domain::model::Record;
use crate::utils::error::{RecordsError, Result};
use serde_json::{Number, Value};
use std::path::Path;

pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Loads the record config at `path`.
///
/// A missing file yields an empty config. Any other read or parse failure is
/// returned to the caller.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RecordConfig> {
    let path = path.as_ref();

    match RecordConfig::from_file(path) {
        Ok(config) => {
            tracing::debug!(
                "Loaded record config from {} ({} required fields)",
                path.display(),
                config.required_fields.len()
            );
            Ok(config)
        }
        Err(RecordsError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No record config at {}, using defaults", path.display());
            Ok(RecordConfig::default())
        }
        Err(e) => Err(e),
    }
}

pub fn is_valid(record: &Record, config: &RecordConfig) -> bool {
    config
        .required_fields
        .iter()
        .all(|field| record.contains(field))
}

/// Keeps the valid records, transformed, in their original order.
pub fn process(records: Vec<Record>, config: &RecordConfig) -> Vec<Record> {
    let now = chrono::Utc::now().timestamp();

    records
        .into_iter()
        .filter(|record| is_valid(record, config))
        .map(|record| transform_at(record, now))
        .collect()
}

pub fn transform(record: Record) -> Record {
    transform_at(record, chrono::Utc::now().timestamp())
}

/// Same as [`transform`] with an explicit epoch-seconds clock.
///
/// Digit-only strings become integers. This is lossy on purpose: leading
/// zeros are dropped (`"007"` becomes `7`), values past `u64::MAX` become a
/// float, and strings too long for a finite float stay strings.
pub fn transform_at(mut record: Record, now: i64) -> Record {
    record
        .data
        .entry(TIMESTAMP_FIELD.to_string())
        .or_insert_with(|| Value::Number(now.into()));

    for value in record.data.values_mut() {
        if let Some(number) = value.as_str().and_then(parse_digit_string) {
            *value = Value::Number(number);
        }
    }

    record
}

fn parse_digit_string(s: &str) -> Option<Number> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    match s.parse::<u64>() {
        Ok(n) => Some(Number::from(n)),
        Err(_) => s.parse::<f64>().ok().and_then(Number::from_f64),
    }
}

/// 持有設定的轉換器，方便重複處理多個批次
#[derive(Debug, Clone, Default)]
pub struct RecordProcessor {
    config: RecordConfig,
}

impl RecordProcessor {
    pub fn new(config: RecordConfig) -> Self {
        Self { config }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(load_config(path)?))
    }

    pub fn config(&self) -> &RecordConfig {
        &self.config
    }

    pub fn process(&self, records: Vec<Record>) -> Vec<Record> {
        process(records, &self.config)
    }
}
