use crate::domain::model::{Item, Record, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Record>>;
    async fn transform(&self, data: Vec<Record>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}

/// Key-value table holding [`Item`]s keyed by `id`.
///
/// Implementations own durability and consistency; callers never cache
/// what they read.
pub trait ItemTable: Send + Sync {
    /// Every item in the table. Implementations must follow pagination to the end.
    fn scan(&self) -> impl std::future::Future<Output = Result<Vec<Item>>> + Send;
    fn get(&self, id: &str) -> impl std::future::Future<Output = Result<Option<Item>>> + Send;
    fn put(&self, item: &Item) -> impl std::future::Future<Output = Result<()>> + Send;
    fn delete(&self, id: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}
