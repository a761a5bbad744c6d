use crate::domain::model::Item;
use crate::domain::ports::ItemTable;
use crate::utils::error::Result;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// 記憶體內的資料表，依 `id` 排序；clone 後共用同一份資料
#[derive(Debug, Clone, Default)]
pub struct InMemoryTable {
    items: Arc<RwLock<BTreeMap<String, Item>>>,
}

impl InMemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect();

        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl ItemTable for InMemoryTable {
    async fn scan(&self) -> Result<Vec<Item>> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Item>> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn put(&self, item: &Item) -> Result<()> {
        self.items
            .write()
            .await
            .insert(item.id.clone(), item.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.items.write().await.remove(id);
        Ok(())
    }
}
