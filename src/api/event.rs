use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Inbound request in the API Gateway proxy shape.
///
/// Only the fields the item handler routes on are modelled; everything else
/// the gateway sends is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayEvent {
    #[serde(default)]
    pub http_method: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

impl ApiGatewayEvent {
    pub fn new(http_method: &str, path: &str) -> Self {
        Self {
            http_method: http_method.to_string(),
            path: path.to_string(),
            ..Default::default()
        }
    }

    pub fn with_path_parameter(mut self, key: &str, value: &str) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn path_parameter(&self, key: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(key))
            .map(String::as_str)
    }
}

/// 回應信封：`body` 永遠是 JSON 字串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status_code: u16, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());

        Self {
            status_code,
            headers,
            body,
        }
    }

    pub fn json<T: Serialize>(status_code: u16, value: &T) -> crate::utils::error::Result<Self> {
        Ok(Self::new(status_code, serde_json::to_string(value)?))
    }

    pub fn error(status_code: u16, message: &str) -> Self {
        Self::new(status_code, serde_json::json!({ "error": message }).to_string())
    }

    pub fn body_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_gateway_event() {
        let event: ApiGatewayEvent = serde_json::from_value(json!({
            "httpMethod": "GET",
            "path": "/items/abc",
            "pathParameters": {"id": "abc"},
            "body": null,
            "requestContext": {"stage": "prod"}
        }))
        .unwrap();

        assert_eq!(event.http_method, "GET");
        assert_eq!(event.path_parameter("id"), Some("abc"));
        assert!(event.body.is_none());
    }

    #[test]
    fn test_null_path_parameters() {
        let event: ApiGatewayEvent =
            serde_json::from_value(json!({"httpMethod": "GET", "path": "/items", "pathParameters": null}))
                .unwrap();
        assert_eq!(event.path_parameter("id"), None);
    }

    #[test]
    fn test_response_envelope_shape() {
        let response = ApiResponse::error(404, "Not found");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["statusCode"], json!(404));
        assert_eq!(value["headers"]["Content-Type"], json!("application/json"));
        assert_eq!(value["headers"]["Access-Control-Allow-Origin"], json!("*"));
        assert_eq!(value["body"], json!(r#"{"error":"Not found"}"#));
    }
}
