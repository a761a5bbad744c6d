pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "lambda")]
pub use adapters::dynamodb::DynamoDbTable;

pub use adapters::memory::InMemoryTable;
pub use api::{ApiGatewayEvent, ApiResponse, ItemsHandler};
pub use config::{cli::LocalStorage, lambda::LambdaConfig, RecordConfig};
pub use crate::core::transformer::{load_config, process, transform, RecordProcessor};
pub use crate::core::{etl::EtlEngine, pipeline::RecordPipeline};
pub use domain::model::{Item, Record};
pub use utils::error::{RecordsError, Result};
