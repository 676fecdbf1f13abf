//! In-memory platform used by the workflow tests

#![allow(dead_code)]

use async_trait::async_trait;
use domain::{AgentResponse, AgentSpec, RemoteAgent, RemoteTeam, TeamSpec};
use platform::{AgentPlatform, PlatformError, PlatformResult};
use std::collections::HashSet;
use std::sync::Mutex;

/// One call as seen by the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create(String),
    Get(String),
    Update(String),
    DeployAgent(String),
    CreateTeam(Vec<String>),
    DeployTeam(String),
    RunAgent(String, String),
    RunTeam(String, String),
}

/// Records every call; ids listed in `failing` fail with HTTP 500.
/// Deploys answer with `deployed_prefix` + id.
#[derive(Default)]
pub struct RecordingPlatform {
    pub calls: Mutex<Vec<Call>>,
    pub updated: Mutex<Vec<RemoteAgent>>,
    failing: HashSet<String>,
    deployed_prefix: String,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(ids: &[&str]) -> Self {
        Self {
            failing: ids.iter().map(|id| id.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_deployed_prefix(mut self, prefix: &str) -> Self {
        self.deployed_prefix = prefix.to_string();
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, id: &str) -> PlatformResult<()> {
        if self.failing.contains(id) {
            return Err(PlatformError::Http {
                status: 500,
                body: format!("{} unavailable", id),
            });
        }
        Ok(())
    }
}

fn agent_id(name: &str) -> String {
    name.split_whitespace()
        .next()
        .unwrap_or("agent")
        .to_lowercase()
}

#[async_trait]
impl AgentPlatform for RecordingPlatform {
    async fn create_agent(&self, spec: &AgentSpec) -> PlatformResult<RemoteAgent> {
        self.record(Call::Create(spec.name.clone()));
        let id = agent_id(&spec.name);
        self.check(&id)?;
        Ok(RemoteAgent {
            id,
            name: spec.name.clone(),
            description: spec.description.clone(),
            tools: spec.tools.clone(),
            llm_id: spec.llm_id.clone(),
        })
    }

    async fn get_agent(&self, id: &str) -> PlatformResult<RemoteAgent> {
        self.record(Call::Get(id.to_string()));
        self.check(&format!("get:{}", id))?;
        Ok(RemoteAgent {
            id: id.to_string(),
            name: format!("agent {}", id),
            description: "stale".to_string(),
            tools: Vec::new(),
            llm_id: "llm".to_string(),
        })
    }

    async fn update_agent(&self, agent: &RemoteAgent) -> PlatformResult<()> {
        self.record(Call::Update(agent.id.clone()));
        self.check(&agent.id)?;
        self.updated.lock().unwrap().push(agent.clone());
        Ok(())
    }

    async fn deploy_agent(&self, id: &str) -> PlatformResult<String> {
        self.record(Call::DeployAgent(id.to_string()));
        self.check(&format!("deploy:{}", id))?;
        Ok(format!("{}{}", self.deployed_prefix, id))
    }

    async fn create_team(&self, spec: &TeamSpec) -> PlatformResult<RemoteTeam> {
        self.record(Call::CreateTeam(spec.agent_ids.clone()));
        self.check("team")?;
        Ok(RemoteTeam {
            id: "team-1".to_string(),
            name: spec.name.clone(),
            agent_ids: spec.agent_ids.clone(),
        })
    }

    async fn deploy_team(&self, id: &str) -> PlatformResult<String> {
        self.record(Call::DeployTeam(id.to_string()));
        self.check(&format!("deploy:{}", id))?;
        Ok(format!("{}{}", self.deployed_prefix, id))
    }

    async fn run_agent(&self, id: &str, prompt: &str) -> PlatformResult<AgentResponse> {
        self.record(Call::RunAgent(id.to_string(), prompt.to_string()));
        self.check(id)?;
        Ok(AgentResponse::Text(format!("agent {} answered", id)))
    }

    async fn run_team(&self, id: &str, prompt: &str) -> PlatformResult<AgentResponse> {
        self.record(Call::RunTeam(id.to_string(), prompt.to_string()));
        self.check(id)?;
        Ok(AgentResponse::Text(format!("team {} answered", id)))
    }
}
