use serde::Serialize;

use crate::errors::{BridgeError, BridgeResult};
use crate::models::message::Message;
use crate::models::tool::Tool;
use crate::providers::base::{CompletionBackend, GenerationParams};
use crate::providers::config::GatewayConfig;
use crate::providers::gateway::LiteLlmGateway;

/// Returned when the endpoint answers without any choice to extract.
const EMPTY_RESPONSE_REPLY: &str = "I apologize, but I couldn't generate a response.";

/// The framework-owned agent entity: identity, behavior instruction and the
/// tool surface the hosting framework drives. Opaque to the bridge except
/// for the instruction, which becomes the leading system message.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub name: String,
    pub description: String,
    pub instruction: String,
    pub tools: Vec<Tool>,
}

impl Agent {
    pub fn new<N, D, I>(name: N, description: D, instruction: I, tools: Vec<Tool>) -> Self
    where
        N: Into<String>,
        D: Into<String>,
        I: Into<String>,
    {
        Agent {
            name: name.into(),
            description: description.into(),
            instruction: instruction.into(),
            tools,
        }
    }
}

/// Read-only description of an adapter's runtime setup. Reports whether a
/// credential is present, never the credential itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentInfo {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<i32>,
    pub configured: bool,
    pub api_key_set: bool,
}

/// Couples an [`Agent`] to a completion backend.
///
/// The adapter owns its generation parameters separately from the agent
/// entity, so nothing framework-owned has to carry provider fields. An
/// instance can only be constructed against a usable configuration; once
/// built, a turn never fails outright — every backend error is folded into
/// the returned text.
pub struct LlmAgent {
    agent: Agent,
    params: GenerationParams,
    config: GatewayConfig,
    backend: Box<dyn CompletionBackend>,
}

impl LlmAgent {
    /// Create an adapter backed by the real gateway.
    ///
    /// Fails with a configuration error when `config` holds no usable
    /// credential, so an unconfigured adapter is never observable.
    pub fn new(agent: Agent, params: GenerationParams, config: GatewayConfig) -> BridgeResult<Self> {
        if !config.is_configured() {
            return Err(BridgeError::not_configured());
        }
        let backend = Box::new(LiteLlmGateway::new(config.clone())?);
        Ok(Self::assemble(agent, params, config, backend))
    }

    /// Create an adapter around an injected backend. The caller vouches for
    /// the backend being usable; no configuration check is applied.
    pub fn with_backend(
        agent: Agent,
        params: GenerationParams,
        config: GatewayConfig,
        backend: Box<dyn CompletionBackend>,
    ) -> Self {
        Self::assemble(agent, params, config, backend)
    }

    fn assemble(
        agent: Agent,
        mut params: GenerationParams,
        config: GatewayConfig,
        backend: Box<dyn CompletionBackend>,
    ) -> Self {
        // Pin the model at construction
        if params.model.is_none() {
            params.model = Some(config.model_name().to_string());
        }
        Self {
            agent,
            params,
            config,
            backend,
        }
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Run one turn: the agent's instruction followed by `messages` goes to
    /// the backend, and the first choice's content comes back verbatim.
    ///
    /// This is the one place errors are swallowed rather than propagated.
    /// The hosting framework's turn loop has no contract for a failed turn,
    /// so a missing choice yields a fixed apology and a backend error yields
    /// a description of itself, both as ordinary replies.
    pub async fn reply(&self, messages: &[Message]) -> String {
        let mut thread = Vec::with_capacity(messages.len() + 1);
        if !self.agent.instruction.is_empty() {
            thread.push(Message::system(self.agent.instruction.clone()));
        }
        thread.extend_from_slice(messages);

        match self.backend.complete(&thread, &self.params).await {
            Ok(response) => match response.choices.into_iter().next() {
                Some(choice) => choice.message.content.unwrap_or_default(),
                None => EMPTY_RESPONSE_REPLY.to_string(),
            },
            Err(e) => {
                tracing::error!("completion request failed: {e}");
                format!("I encountered an error while processing your request: {e}")
            }
        }
    }

    /// Describe the adapter's model setup and configuration state.
    pub fn info(&self) -> AgentInfo {
        AgentInfo {
            model: self
                .params
                .model
                .clone()
                .unwrap_or_else(|| self.config.model_name().to_string()),
            temperature: self.params.temperature,
            max_tokens: self.params.max_tokens,
            configured: self.config.is_configured(),
            api_key_set: self.config.api_key.is_some(),
        }
    }
}

/// Assemble an adapter from its parts, resolving configuration from the
/// environment. The stable construction entry point for external callers.
pub fn build_agent<N, D, I>(
    name: N,
    description: D,
    instruction: I,
    tools: Vec<Tool>,
    params: GenerationParams,
) -> BridgeResult<LlmAgent>
where
    N: Into<String>,
    D: Into<String>,
    I: Into<String>,
{
    let agent = Agent::new(name, description, instruction, tools);
    LlmAgent::new(agent, params, GatewayConfig::from_env())
}
