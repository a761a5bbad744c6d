pub mod event;
pub mod handler;

pub use event::{ApiGatewayEvent, ApiResponse};
pub use handler::{ApiError, ItemsHandler, Route};
