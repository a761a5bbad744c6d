use records_api::{load_config, process, EtlEngine, LocalStorage, Record, RecordConfig, RecordPipeline};
use records_api::core::ConfigProvider;
use serde_json::json;
use tempfile::TempDir;

struct TestConfig {
    input: String,
    output_path: String,
}

impl ConfigProvider for TestConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        "processed.json"
    }
}

fn records(value: serde_json::Value) -> Vec<Record> {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_sample_batch_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    std::fs::write(&config_path, r#"{"required_fields": ["id", "name", "score"]}"#).unwrap();

    let config = load_config(&config_path).unwrap();
    let result = process(
        records(json!([
            {"id": "1", "name": "Alice", "score": "95"},
            {"id": "2", "name": "Bob", "score": "87"},
            {"id": "3", "name": "Charlie"}
        ])),
        &config,
    );

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].get("id"), Some(&json!(1)));
    assert_eq!(result[1].get("score"), Some(&json!(87)));
    assert!(result.iter().all(|r| r.contains("timestamp")));
}

#[test]
fn test_missing_config_keeps_every_record() {
    let temp_dir = TempDir::new().unwrap();
    let config = load_config(temp_dir.path().join("absent.json")).unwrap();

    assert_eq!(config, RecordConfig::default());
    let result = process(records(json!([{"id": "3", "name": "Charlie"}, {}])), &config);
    assert_eq!(result.len(), 2);
}

#[tokio::test]
async fn test_end_to_end_json_batch() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().to_str().unwrap().to_string();
    std::fs::write(
        temp_dir.path().join("input.json"),
        json!([
            {"id": "1", "name": "Alice", "score": "95"},
            {"id": "3", "name": "Charlie"}
        ])
        .to_string(),
    )
    .unwrap();

    let config = TestConfig {
        input: "input.json".to_string(),
        output_path: "out".to_string(),
    };
    let pipeline = RecordPipeline::new(
        LocalStorage::new(base.clone()),
        config,
        RecordConfig::with_required_fields(["id", "name", "score"]),
    );

    let output_path = EtlEngine::new(pipeline).run().await.unwrap();

    assert_eq!(output_path, "out/processed.json");
    let written = std::fs::read_to_string(temp_dir.path().join("out/processed.json")).unwrap();
    let output: Vec<serde_json::Value> = serde_json::from_str(&written).unwrap();
    assert_eq!(output.len(), 1);
    assert_eq!(output[0]["id"], json!(1));
    assert_eq!(output[0]["score"], json!(95));
    assert!(output[0]["timestamp"].is_i64());
}

#[tokio::test]
async fn test_end_to_end_csv_batch() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().to_str().unwrap().to_string();
    std::fs::write(
        temp_dir.path().join("input.csv"),
        "id,name,zip\n1,Alice,00501\n2,Bob,90210\n",
    )
    .unwrap();

    let config = TestConfig {
        input: "input.csv".to_string(),
        output_path: "out".to_string(),
    };
    let pipeline = RecordPipeline::new(
        LocalStorage::new(base),
        config,
        RecordConfig::with_required_fields(["id"]),
    );

    EtlEngine::new(pipeline).run().await.unwrap();

    let written = std::fs::read_to_string(temp_dir.path().join("out/processed.json")).unwrap();
    let output: Vec<serde_json::Value> = serde_json::from_str(&written).unwrap();
    assert_eq!(output.len(), 2);
    // leading zeros are lost when digit strings become integers
    assert_eq!(output[0]["zip"], json!(501));
    assert_eq!(output[1]["name"], json!("Bob"));
}

#[tokio::test]
async fn test_invalid_input_reports_error() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().to_str().unwrap().to_string();
    std::fs::write(temp_dir.path().join("input.json"), "\"just a string\"").unwrap();

    let config = TestConfig {
        input: "input.json".to_string(),
        output_path: "out".to_string(),
    };
    let pipeline = RecordPipeline::new(LocalStorage::new(base), config, RecordConfig::default());

    let result = EtlEngine::new(pipeline).run().await;

    assert!(result.is_err());
    assert!(!temp_dir.path().join("out/processed.json").exists());
}
