//! tern couples a framework-owned agent definition to a pluggable
//! completion backend. The real backend speaks the OpenAI-compatible
//! chat-completions dialect of a LiteLLM router, so route strings like
//! `gemini/gemini-2.0-flash-exp` select the underlying model.
//!
//! [`providers::config`] resolves the environment, [`providers::gateway`]
//! turns a conversation into one HTTP completion call with typed failures,
//! and [`agent`] folds those failures into plain replies so a hosting
//! framework's turn loop never sees an error it has no contract for.
pub mod agent;
pub mod errors;
pub mod models;
pub mod providers;
pub mod tools;
