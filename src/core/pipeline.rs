use crate::config::record_config::RecordConfig;
use crate::core::transformer;
use crate::core::{ConfigProvider, Pipeline, Record, Storage, TransformResult};
use crate::utils::error::{RecordsError, Result};
use std::collections::HashMap;

pub struct RecordPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    record_config: RecordConfig,
}

impl<S: Storage, C: ConfigProvider> RecordPipeline<S, C> {
    pub fn new(storage: S, config: C, record_config: RecordConfig) -> Self {
        Self {
            storage,
            config,
            record_config,
        }
    }

    fn is_csv_input(&self) -> bool {
        std::path::Path::new(self.config.input_path())
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
    }
}

/// CSV 每一列轉成一筆紀錄，所有值都是字串
fn parse_csv_records(bytes: &[u8]) -> Result<Vec<Record>> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let data: HashMap<String, serde_json::Value> = headers
            .iter()
            .zip(row.iter())
            .map(|(key, value)| (key.to_string(), serde_json::Value::String(value.to_string())))
            .collect();
        records.push(Record { data });
    }

    Ok(records)
}

/// JSON 輸入：物件陣列或單一物件
fn parse_json_records(bytes: &[u8]) -> Result<Vec<Record>> {
    let json_data: serde_json::Value = serde_json::from_slice(bytes)?;

    match json_data {
        serde_json::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                serde_json::Value::Object(obj) => Ok(Record::from(obj)),
                other => Err(RecordsError::ProcessingError {
                    message: format!("Entry {} is not a JSON object: {}", index, other),
                }),
            })
            .collect(),
        serde_json::Value::Object(obj) => Ok(vec![Record::from(obj)]),
        other => Err(RecordsError::ProcessingError {
            message: format!("Expected a JSON object or array, got: {}", other),
        }),
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RecordPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        tracing::debug!("Reading records from: {}", self.config.input_path());
        let bytes = self.storage.read_file(self.config.input_path()).await?;

        if self.is_csv_input() {
            parse_csv_records(&bytes)
        } else {
            parse_json_records(&bytes)
        }
    }

    async fn transform(&self, data: Vec<Record>) -> Result<TransformResult> {
        let input_count = data.len();
        let processed_records = transformer::process(data, &self.record_config);

        Ok(TransformResult {
            processed_records,
            input_count,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = format!(
            "{}/{}",
            self.config.output_path().trim_end_matches('/'),
            self.config.output_file()
        );

        let json_data = serde_json::to_string_pretty(&result.processed_records)?;
        tracing::debug!(
            "Writing {} records ({} bytes) to storage",
            result.processed_records.len(),
            json_data.len()
        );
        self.storage
            .write_file(&output_path, json_data.as_bytes())
            .await?;

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put_file(&self, path: &str, data: &str) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.as_bytes().to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                RecordsError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        input_path: String,
    }

    impl MockConfig {
        fn new(input_path: &str) -> Self {
            Self {
                input_path: input_path.to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &str {
            &self.input_path
        }

        fn output_path(&self) -> &str {
            "test_output/"
        }

        fn output_file(&self) -> &str {
            "processed.json"
        }
    }

    #[tokio::test]
    async fn test_extract_json_array() {
        let storage = MockStorage::new();
        storage
            .put_file("input.json", r#"[{"id": "1", "name": "Alice"}, {"id": "2"}]"#)
            .await;
        let pipeline = RecordPipeline::new(
            storage,
            MockConfig::new("input.json"),
            RecordConfig::default(),
        );

        let records = pipeline.extract().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("name"), Some(&json!("Alice")));
    }

    #[tokio::test]
    async fn test_extract_single_object() {
        let storage = MockStorage::new();
        storage.put_file("input.json", r#"{"id": "7"}"#).await;
        let pipeline = RecordPipeline::new(
            storage,
            MockConfig::new("input.json"),
            RecordConfig::default(),
        );

        let records = pipeline.extract().await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("id"), Some(&json!("7")));
    }

    #[tokio::test]
    async fn test_extract_rejects_non_object_entries() {
        let storage = MockStorage::new();
        storage.put_file("input.json", r#"[{"id": "1"}, 42]"#).await;
        let pipeline = RecordPipeline::new(
            storage,
            MockConfig::new("input.json"),
            RecordConfig::default(),
        );

        let result = pipeline.extract().await;
        assert!(matches!(result, Err(RecordsError::ProcessingError { .. })));
    }

    #[tokio::test]
    async fn test_extract_csv_rows_as_strings() {
        let storage = MockStorage::new();
        storage
            .put_file("input.csv", "id,name,score\n1,Alice,95\n2,Bob,\n")
            .await;
        let pipeline = RecordPipeline::new(
            storage,
            MockConfig::new("input.csv"),
            RecordConfig::default(),
        );

        let records = pipeline.extract().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("score"), Some(&json!("95")));
        assert_eq!(records[1].get("score"), Some(&json!("")));
    }

    #[tokio::test]
    async fn test_extract_missing_input_fails() {
        let pipeline = RecordPipeline::new(
            MockStorage::new(),
            MockConfig::new("missing.json"),
            RecordConfig::default(),
        );

        assert!(matches!(
            pipeline.extract().await,
            Err(RecordsError::IoError(_))
        ));
    }

    #[tokio::test]
    async fn test_transform_filters_with_required_fields() {
        let pipeline = RecordPipeline::new(
            MockStorage::new(),
            MockConfig::new("input.json"),
            RecordConfig::with_required_fields(["id", "name"]),
        );
        let input = vec![
            serde_json::from_value(json!({"id": "1", "name": "Alice", "score": "95"})).unwrap(),
            serde_json::from_value(json!({"id": "2", "score": "87"})).unwrap(),
        ];

        let result = pipeline.transform(input).await.unwrap();

        assert_eq!(result.input_count, 2);
        assert_eq!(result.processed_records.len(), 1);
        assert_eq!(result.processed_records[0].get("score"), Some(&json!(95)));
    }

    #[tokio::test]
    async fn test_load_writes_json_array() {
        let storage = MockStorage::new();
        let pipeline = RecordPipeline::new(
            storage.clone(),
            MockConfig::new("input.json"),
            RecordConfig::default(),
        );
        let transform_result = TransformResult {
            processed_records: vec![serde_json::from_value(json!({"id": 1})).unwrap()],
            input_count: 3,
        };

        let output_path = pipeline.load(transform_result).await.unwrap();

        assert_eq!(output_path, "test_output/processed.json");
        let written = storage.get_file(&output_path).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&written).unwrap();
        assert_eq!(parsed, json!([{"id": 1}]));
    }
}
