use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::base::{CompletionBackend, GenerationParams};
use crate::errors::BridgeResult;
use crate::models::completion::ChatCompletion;
use crate::models::message::Message;

/// A mock backend that returns pre-configured outcomes for testing and
/// records every conversation it was called with.
pub struct MockBackend {
    outcomes: Arc<Mutex<Vec<BridgeResult<ChatCompletion>>>>,
    calls: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl MockBackend {
    /// Create a new mock backend with a sequence of outcomes
    pub fn new(outcomes: Vec<BridgeResult<ChatCompletion>>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(outcomes)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle onto the call log that survives moving the backend into an adapter
    pub fn call_log(&self) -> Arc<Mutex<Vec<Vec<Message>>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl CompletionBackend for MockBackend {
    async fn complete(
        &self,
        messages: &[Message],
        _params: &GenerationParams,
    ) -> BridgeResult<ChatCompletion> {
        self.calls.lock().unwrap().push(messages.to_vec());
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            // Keep returning an empty response once the queue runs dry
            Ok(ChatCompletion::default())
        } else {
            outcomes.remove(0)
        }
    }
}
