use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::errors::BridgeResult;
use crate::models::completion::ChatCompletion;
use crate::models::message::Message;

/// Generation parameters attached to an adapter at construction time.
///
/// `model = None` defers to the gateway configuration's resolved model.
/// `extra` entries are merged verbatim into the request payload, the
/// passthrough surface for router options this crate does not model.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: Option<String>,
    pub temperature: f32,
    pub max_tokens: Option<i32>,
    pub extra: Map<String, Value>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: None,
            temperature: 0.7,
            max_tokens: None,
            extra: Map::new(),
        }
    }
}

impl GenerationParams {
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: i32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_extra<S: Into<String>>(mut self, key: S, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// The seam between the agent adapter and whatever produces completions.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Generate the next completion for an ordered message sequence.
    ///
    /// Callers pass a non-empty conversation, a finite temperature and, if
    /// set, a positive `max_tokens`; the backend reports every failure as
    /// one of this crate's two error kinds.
    async fn complete(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> BridgeResult<ChatCompletion>;
}
