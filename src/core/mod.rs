pub mod etl;
pub mod pipeline;
pub mod transformer;

pub use crate::domain::model::{Record, TransformResult};
pub use crate::domain::ports::{ConfigProvider, ItemTable, Pipeline, Storage};
pub use crate::utils::error::Result;
