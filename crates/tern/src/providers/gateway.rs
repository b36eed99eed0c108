use async_trait::async_trait;
use reqwest::Client;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;

use super::base::{CompletionBackend, GenerationParams};
use super::config::GatewayConfig;
use crate::errors::{BridgeError, BridgeResult};
use crate::models::completion::ChatCompletion;
use crate::models::message::Message;

/// Gateway to an OpenAI-compatible chat-completions endpoint, as exposed by
/// a LiteLLM router. Holds no connection state between calls; each
/// completion is a discrete request/response.
pub struct LiteLlmGateway {
    client: Client,
    config: GatewayConfig,
}

impl LiteLlmGateway {
    pub fn new(config: GatewayConfig) -> BridgeResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(600)) // 10 minutes timeout
            .build()
            .map_err(|e| BridgeError::Configuration(format!("failed to build http client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Build a gateway from the current process environment.
    pub fn from_env() -> BridgeResult<Self> {
        Self::new(GatewayConfig::from_env())
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    async fn post(&self, payload: Value) -> BridgeResult<Value> {
        let url = format!(
            "{}/v1/chat/completions",
            self.config.host.trim_end_matches('/')
        );

        let api_key = self.config.api_key.as_deref().unwrap_or_default();
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&payload)
            .send()
            .await
            .map_err(|e| BridgeError::Completion(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json()
                .await
                .map_err(|e| BridgeError::Completion(format!("malformed response body: {e}"))),
            status if status == StatusCode::TOO_MANY_REQUESTS || status.as_u16() >= 500 => {
                Err(BridgeError::Completion(format!("server error: {status}")))
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(BridgeError::Completion(format!(
                    "request failed: {status}: {body}"
                )))
            }
        }
    }

    /// Request a completion for `messages` with the given parameters.
    ///
    /// Configuration is checked before any network attempt; the model falls
    /// back to the configured one when `params` carries none. The response
    /// is returned whole, choices and all.
    pub async fn complete(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> BridgeResult<ChatCompletion> {
        if !self.config.is_configured() {
            return Err(BridgeError::not_configured());
        }

        let model = params
            .model
            .as_deref()
            .unwrap_or_else(|| self.config.model_name());

        let mut payload = json!({
            "model": model,
            "messages": messages,
            "temperature": params.temperature,
        });
        if let Some(tokens) = params.max_tokens {
            payload
                .as_object_mut()
                .unwrap()
                .insert("max_tokens".to_string(), json!(tokens));
        }
        for (key, value) in &params.extra {
            payload
                .as_object_mut()
                .unwrap()
                .insert(key.clone(), value.clone());
        }

        let response = self.post(payload).await?;

        // Some routers report failures inside a 200 body
        if let Some(error) = response.get("error") {
            return Err(BridgeError::Completion(format!("router error: {error}")));
        }

        serde_json::from_value(response)
            .map_err(|e| BridgeError::Completion(format!("malformed response body: {e}")))
    }
}

#[async_trait]
impl CompletionBackend for LiteLlmGateway {
    async fn complete(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> BridgeResult<ChatCompletion> {
        LiteLlmGateway::complete(self, messages, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(host: String) -> GatewayConfig {
        GatewayConfig {
            api_key: Some("test_api_key".to_string()),
            model: "gemini/gemini-2.0-flash-exp".to_string(),
            host,
            use_vertex: false,
        }
    }

    fn completion_body(content: &str) -> Value {
        json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "gemini/gemini-2.0-flash-exp",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": content
                },
                "finish_reason": "stop"
            }],
            "usage": {
                "prompt_tokens": 12,
                "completion_tokens": 15,
                "total_tokens": 27
            }
        })
    }

    async fn setup_mock_server(response_body: Value) -> (MockServer, LiteLlmGateway) {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
            .mount(&mock_server)
            .await;

        let gateway = LiteLlmGateway::new(test_config(mock_server.uri())).unwrap();
        (mock_server, gateway)
    }

    #[tokio::test]
    async fn test_complete_basic() -> Result<()> {
        let (_server, gateway) = setup_mock_server(completion_body("Hello! How can I assist you today?")).await;

        let messages = vec![Message::user("Hello?")];
        let response = gateway
            .complete(&messages, &GenerationParams::default())
            .await?;

        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("Hello! How can I assist you today?")
        );
        let usage = response.usage.unwrap();
        assert_eq!(usage.input_tokens, Some(12));
        assert_eq!(usage.output_tokens, Some(15));
        assert_eq!(usage.total_tokens, Some(27));
        Ok(())
    }

    #[tokio::test]
    async fn test_payload_carries_params_and_auth() -> Result<()> {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test_api_key"))
            .and(body_partial_json(json!({
                "model": "gemini/gemini-1.5-pro",
                "temperature": 0.25,
                "max_tokens": 1000,
                "top_p": 0.9,
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "hi"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let gateway = LiteLlmGateway::new(test_config(mock_server.uri()))?;
        let params = GenerationParams::default()
            .with_model("gemini/gemini-1.5-pro")
            .with_temperature(0.25)
            .with_max_tokens(1000)
            .with_extra("top_p", json!(0.9));
        let messages = vec![Message::system("be brief"), Message::user("hi")];

        gateway.complete(&messages, &params).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_model_defaults_to_configured() -> Result<()> {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(json!({"model": "gemini/gemini-2.0-flash-exp"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let gateway = LiteLlmGateway::new(test_config(mock_server.uri()))?;
        gateway
            .complete(&[Message::user("hi")], &GenerationParams::default())
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_unconfigured_fails_before_any_request() -> Result<()> {
        let mock_server = MockServer::start().await;
        // No request must ever reach the server
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .expect(0)
            .mount(&mock_server)
            .await;

        let config = GatewayConfig {
            api_key: None,
            ..test_config(mock_server.uri())
        };
        let gateway = LiteLlmGateway::new(config)?;
        let result = gateway
            .complete(&[Message::user("hi")], &GenerationParams::default())
            .await;

        match result {
            Err(BridgeError::Configuration(message)) => {
                assert!(message.contains("GOOGLE_API_KEY"))
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_server_error_wrapped() -> Result<()> {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let gateway = LiteLlmGateway::new(test_config(mock_server.uri()))?;
        let result = gateway
            .complete(&[Message::user("hi")], &GenerationParams::default())
            .await;

        match result {
            Err(BridgeError::Completion(message)) => assert!(message.contains("500")),
            other => panic!("expected completion error, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_auth_rejection_wrapped() -> Result<()> {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string("{\"detail\":\"invalid key\"}"),
            )
            .mount(&mock_server)
            .await;

        let gateway = LiteLlmGateway::new(test_config(mock_server.uri()))?;
        let result = gateway
            .complete(&[Message::user("hi")], &GenerationParams::default())
            .await;

        match result {
            Err(BridgeError::Completion(message)) => {
                assert!(message.contains("401"));
                assert!(message.contains("invalid key"));
            }
            other => panic!("expected completion error, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_error_in_ok_body_wrapped() -> Result<()> {
        let (_server, gateway) = setup_mock_server(json!({
            "error": {"message": "quota exceeded", "type": "rate_limit_error"}
        }))
        .await;

        let result = gateway
            .complete(&[Message::user("hi")], &GenerationParams::default())
            .await;

        match result {
            Err(BridgeError::Completion(message)) => assert!(message.contains("quota exceeded")),
            other => panic!("expected completion error, got {other:?}"),
        }
        Ok(())
    }
}
