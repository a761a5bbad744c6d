use crate::domain::model::Item;
use crate::domain::ports::ItemTable;
use crate::utils::error::{RecordsError, Result};
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use std::collections::HashMap;

const KEY_ATTRIBUTE: &str = "id";

#[derive(Debug, Clone)]
pub struct DynamoDbTable {
    client: DynamoDbClient,
    table_name: String,
}

impl DynamoDbTable {
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

fn table_error(operation: &str, e: impl std::error::Error) -> RecordsError {
    RecordsError::TableError {
        message: format!("DynamoDB {} failed: {}", operation, DisplayErrorContext(e)),
    }
}

pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (KEY_ATTRIBUTE.to_string(), AttributeValue::S(item.id.clone())),
        ("name".to_string(), AttributeValue::S(item.name.clone())),
        (
            "description".to_string(),
            AttributeValue::S(item.description.clone()),
        ),
        (
            "created_at".to_string(),
            AttributeValue::S(item.created_at.clone()),
        ),
        (
            "updated_at".to_string(),
            AttributeValue::S(item.updated_at.clone()),
        ),
    ])
}

/// 缺少的非鍵欄位以空字串補上；缺少 `id` 則視為資料表錯誤
pub fn item_from_attributes(attributes: &HashMap<String, AttributeValue>) -> Result<Item> {
    let string_attr = |name: &str| -> Option<String> {
        attributes
            .get(name)
            .and_then(|value| value.as_s().ok())
            .cloned()
    };

    let id = string_attr(KEY_ATTRIBUTE).ok_or_else(|| RecordsError::TableError {
        message: "Stored item has no string 'id' attribute".to_string(),
    })?;

    Ok(Item {
        id,
        name: string_attr("name").unwrap_or_default(),
        description: string_attr("description").unwrap_or_default(),
        created_at: string_attr("created_at").unwrap_or_default(),
        updated_at: string_attr("updated_at").unwrap_or_default(),
    })
}

impl ItemTable for DynamoDbTable {
    async fn scan(&self) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        let mut start_key = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| table_error("scan", e))?;

            for attributes in output.items() {
                items.push(item_from_attributes(attributes)?);
            }

            match output.last_evaluated_key() {
                Some(key) if !key.is_empty() => start_key = Some(key.clone()),
                _ => break,
            }
        }

        tracing::debug!("Scanned {} items from {}", items.len(), self.table_name);
        Ok(items)
    }

    async fn get(&self, id: &str) -> Result<Option<Item>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .consistent_read(true)
            .send()
            .await
            .map_err(|e| table_error("get_item", e))?;

        output.item().map(item_from_attributes).transpose()
    }

    async fn put(&self, item: &Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(|e| table_error("put_item", e))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| table_error("delete_item", e))?;

        Ok(())
    }
}
