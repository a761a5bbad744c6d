use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 一筆輸入資料：欄位名稱對應任意 JSON 值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    pub fn new(data: HashMap<String, serde_json::Value>) -> Self {
        Self { data }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.data.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.data.get(field)
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Record {
    fn from(obj: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            data: obj.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub processed_records: Vec<Record>,
    pub input_count: usize,
}

/// 持久化於資料表中的項目，以 `id` 為鍵
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

/// 建立項目的請求內容，未知欄位會被忽略
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
