use std::{fmt, time::Duration};

use base64::{Engine as _, engine::general_purpose};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::domain::diagnosis::{entities::UpstreamError, ports::DiagnosticUpstream};

/// Posts leaf images to a diagnostic webhook (typically an n8n workflow).
#[derive(Debug, Clone)]
pub struct WebhookDiagnosticClient {
    webhook_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct WebhookRequest {
    image: String,
}

impl WebhookDiagnosticClient {
    pub fn new(webhook_url: String, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            tracing::error!("Failed to build webhook client: {}", e);
            UpstreamError::Transport(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            webhook_url,
            client,
        })
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    async fn call_webhook(&self, request: WebhookRequest) -> Result<Value, UpstreamError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Webhook request failed: {}", e);
                UpstreamError::Transport(e.to_string())
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound);
        }

        if !status.is_success() {
            return Err(status_error(status, response.text().await));
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read webhook response: {}", e);
            UpstreamError::Transport(format!("Failed to read response body: {}", e))
        })?;

        Ok(parse_payload(body))
    }
}

impl DiagnosticUpstream for WebhookDiagnosticClient {
    async fn submit_image(&self, image_data: Vec<u8>) -> Result<Value, UpstreamError> {
        let request = WebhookRequest {
            image: general_purpose::STANDARD.encode(&image_data),
        };

        self.call_webhook(request).await
    }
}

fn status_error<E: fmt::Display>(status: StatusCode, body: Result<String, E>) -> UpstreamError {
    let body = body.unwrap_or_else(|e| {
        tracing::error!("Failed to read webhook error response: {}", e);
        String::new()
    });
    tracing::error!("Webhook error: {} - {}", status, body);

    UpstreamError::Status {
        status: status.as_u16(),
        body,
    }
}

/// Bodies that are not JSON are kept as a string payload and left to the
/// normalizer.
fn parse_payload(body: String) -> Value {
    serde_json::from_str(&body).unwrap_or_else(|e| {
        tracing::warn!("Webhook response is not JSON: {}", e);
        Value::String(body)
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_json_body() {
        assert_eq!(
            parse_payload(r#"{"disease":"Spot","confidence":"80"}"#.to_string()),
            json!({ "disease": "Spot", "confidence": "80" })
        );
    }

    #[test]
    fn test_parse_non_json_body() {
        assert_eq!(
            parse_payload("Workflow was started".to_string()),
            Value::String("Workflow was started".to_string())
        );
    }

    #[test]
    fn test_request_serializes_image_field() {
        let request = WebhookRequest {
            image: general_purpose::STANDARD.encode([1u8, 2, 3]),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "image": "AQID" })
        );
    }

    #[test]
    fn test_status_error_keeps_body() {
        let error = status_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            Ok::<_, String>("workflow crashed".to_string()),
        );
        assert_eq!(
            error,
            UpstreamError::Status {
                status: 500,
                body: "workflow crashed".to_string(),
            }
        );
    }

    #[test]
    fn test_status_error_survives_unreadable_body() {
        let error = status_error(StatusCode::BAD_GATEWAY, Err("connection reset"));
        assert_eq!(
            error,
            UpstreamError::Status {
                status: 502,
                body: String::new(),
            }
        );
    }

    #[tokio::test]
    async fn test_unreachable_webhook_is_transport_error() {
        let client = WebhookDiagnosticClient::new(
            "http://127.0.0.1:9/webhook/leaf".to_string(),
            Duration::from_secs(2),
        )
        .unwrap();

        let result = client.submit_image(vec![1, 2, 3]).await;

        assert!(matches!(result, Err(UpstreamError::Transport(_))));
    }
}
