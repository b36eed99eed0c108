use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool that can be used by a model.
///
/// The bridge only carries tool metadata on behalf of the hosting framework;
/// it never invokes tools itself and never forwards them to the completion
/// endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    /// The name of the tool
    pub name: String,
    /// A description of what the tool does
    pub description: String,
    /// JSON schema for the parameters the tool accepts
    pub parameters: Value,
}

impl Tool {
    /// Create a new tool with the given name and description
    pub fn new<N, D>(name: N, description: D, parameters: Value) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        Tool {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_creation() {
        let tool = Tool::new(
            "get_weather",
            "Look up the weather for a city",
            json!({
                "type": "object",
                "properties": {
                    "city": {"type": "string"}
                },
                "required": ["city"]
            }),
        );
        assert_eq!(tool.name, "get_weather");
        assert_eq!(tool.parameters["required"], json!(["city"]));
    }
}
