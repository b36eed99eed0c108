use std::env;

/// Route string handed to the router when no model is selected.
pub const DEFAULT_MODEL: &str = "gemini/gemini-2.0-flash-exp";
/// Local default for a LiteLLM router.
pub const DEFAULT_HOST: &str = "http://localhost:4000";

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const MODEL_VAR: &str = "LITELLM_MODEL";
pub const HOST_VAR: &str = "LITELLM_HOST";
pub const VERTEX_VAR: &str = "GOOGLE_GENAI_USE_VERTEXAI";

/// The variable the downstream Gemini client authenticates with. Publishing
/// the credential under this name is the one piece of shared state this
/// crate mutates.
pub const PUBLISHED_KEY_VAR: &str = "GEMINI_API_KEY";

/// Resolved environment configuration for the completion gateway.
///
/// Constructed once at an edge (factory, CLI) and passed down by value;
/// immutable afterwards. `from_env` never fails: a missing credential leaves
/// the config in an unconfigured state that the gateway and adapter check
/// before use.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub host: String,
    /// Read for reporting only; nothing consults it to change behavior.
    pub use_vertex: bool,
}

impl GatewayConfig {
    /// Resolve configuration from the process environment.
    ///
    /// When a credential is present it is also published under
    /// [`PUBLISHED_KEY_VAR`]; re-running with the same credential is a no-op
    /// in effect.
    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_VAR).ok();
        let model = env::var(MODEL_VAR)
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let host = env::var(HOST_VAR)
            .ok()
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let use_vertex = env::var(VERTEX_VAR)
            .map(|v| v.eq_ignore_ascii_case("TRUE"))
            .unwrap_or(false);

        let config = GatewayConfig {
            api_key,
            model,
            host,
            use_vertex,
        };
        if config.is_configured() {
            // The downstream client reads its own variable name
            if let Some(key) = &config.api_key {
                env::set_var(PUBLISHED_KEY_VAR, key);
            }
        }
        config
    }

    /// True iff the credential is a non-empty, non-whitespace string.
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false)
    }

    /// The resolved model identifier. Never empty.
    pub fn model_name(&self) -> &str {
        &self.model
    }
}
