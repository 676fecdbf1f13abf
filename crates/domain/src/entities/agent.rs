//! Agent and team records exchanged with the hosted platform

use crate::value_objects::{Role, ToolKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A remote tool attached to an agent, identified by platform model id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolBinding {
    pub model_id: String,
    pub description: String,
}

impl ToolBinding {
    pub fn new(kind: ToolKind, model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            description: kind.description().to_string(),
        }
    }
}

/// Everything the platform needs to create an agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tools: Vec<ToolBinding>,
    pub llm_id: String,
}

/// An agent as known to the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteAgent {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tools: Vec<ToolBinding>,
    #[serde(default)]
    pub llm_id: String,
}

/// Team composition request: the member agents are referenced by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSpec {
    pub name: String,
    pub description: String,
    pub agent_ids: Vec<String>,
    pub llm_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteTeam {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub agent_ids: Vec<String>,
}

/// A role paired with the remote identifier assigned at creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRef {
    pub role: Role,
    pub id: String,
}

/// Result of running an agent or team
#[derive(Debug, Clone, PartialEq)]
pub enum AgentResponse {
    /// Plain text answer
    Text(String),
    /// Anything else the platform returned, kept as-is
    Structured(Value),
}

impl AgentResponse {
    /// Interpret a platform payload: bare strings and `output` fields
    /// (top-level or under `data`) become text, the rest stays structured.
    pub fn from_json(value: Value) -> Self {
        if let Value::String(text) = value {
            return AgentResponse::Text(text);
        }

        let output = value
            .get("output")
            .or_else(|| value.get("data").and_then(|data| data.get("output")))
            .and_then(Value::as_str)
            .map(str::to_string);

        match output {
            Some(text) => AgentResponse::Text(text),
            None => AgentResponse::Structured(value),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AgentResponse::Text(text) => Some(text),
            AgentResponse::Structured(_) => None,
        }
    }
}

impl fmt::Display for AgentResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentResponse::Text(text) => write!(f, "{text}"),
            AgentResponse::Structured(value) => match serde_json::to_string_pretty(value) {
                Ok(pretty) => write!(f, "{pretty}"),
                Err(_) => write!(f, "{value}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_from_string() {
        let response = AgentResponse::from_json(json!("Teach with local examples"));
        assert_eq!(response.as_text(), Some("Teach with local examples"));
    }

    #[test]
    fn test_response_from_nested_output() {
        let response = AgentResponse::from_json(json!({
            "status": "SUCCESS",
            "data": { "output": "Village V001 improved most" }
        }));
        assert_eq!(response.to_string(), "Village V001 improved most");
    }

    #[test]
    fn test_response_keeps_unknown_shapes() {
        let payload = json!({ "status": "IN_PROGRESS", "url": "https://poll" });
        let response = AgentResponse::from_json(payload.clone());
        assert_eq!(response, AgentResponse::Structured(payload));
        assert!(response.to_string().contains("IN_PROGRESS"));
    }

    #[test]
    fn test_tool_binding_carries_description() {
        let tool = ToolBinding::new(ToolKind::Translation, "61b097551efecf30109d32da");
        assert!(tool.description.starts_with("Translates content"));
    }
}
