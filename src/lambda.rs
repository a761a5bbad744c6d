use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use records_api::utils::{logger, validation::Validate};
use records_api::{ApiGatewayEvent, ApiResponse, DynamoDbTable, ItemsHandler, LambdaConfig};

async fn function_handler(
    handler: &ItemsHandler<DynamoDbTable>,
    event: LambdaEvent<ApiGatewayEvent>,
) -> Result<ApiResponse, Error> {
    let (request, context) = event.into_parts();
    tracing::info!(
        request_id = %context.request_id,
        "{} {}",
        request.http_method,
        request.path
    );

    let response = handler.handle(&request).await;

    tracing::info!(
        request_id = %context.request_id,
        status_code = response.status_code,
        "Request completed"
    );
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let lambda_config = LambdaConfig::from_env()?;
    lambda_config.validate()?;

    // 創建AWS配置和DynamoDB客戶端
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
    if let Some(region) = &lambda_config.region {
        builder = builder.region(Region::new(region.clone()));
    }
    if let Some(endpoint) = &lambda_config.endpoint_url {
        builder = builder.endpoint_url(endpoint);
    }
    let client = DynamoDbClient::from_conf(builder.build());

    let table = DynamoDbTable::new(client, lambda_config.table_name.clone());
    let handler = ItemsHandler::new(table);
    tracing::info!("Serving items from table {}", handler.table().table_name());

    run(service_fn(|event| function_handler(&handler, event))).await
}
