//! Routing of coordinator requests to a role agent or the team

use crate::errors::ApplicationResult;
use crate::prompts::{smoke_query, target_name};
use crate::registry::{AgentRegistry, DispatchTarget};
use common::RequestContext;
use domain::{Action, AgentResponse};
use platform::AgentPlatform;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Append the village and teacher context to a free-text query.
/// Absent or blank identifiers add nothing.
pub fn build_prompt(query: &str, village: Option<&str>, teacher: Option<&str>) -> String {
    let mut prompt = query.to_string();
    if let Some(village) = village.map(str::trim).filter(|id| !id.is_empty()) {
        prompt.push_str(&format!(" (for village {})", village));
    }
    if let Some(teacher) = teacher.map(str::trim).filter(|id| !id.is_empty()) {
        prompt.push_str(&format!(" (regarding teacher {})", teacher));
    }
    prompt
}

/// Answer (or error) of one agent to its canned request
#[derive(Debug, Clone, PartialEq)]
pub struct SmokeOutcome {
    pub action: Action,
    pub agent: &'static str,
    pub result: Result<AgentResponse, String>,
}

/// Outcome of [`Dispatcher::smoke_test`], in menu order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmokeReport {
    pub outcomes: Vec<SmokeOutcome>,
}

impl SmokeReport {
    pub fn failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.is_err())
            .count()
    }
}

pub struct Dispatcher {
    platform: Arc<dyn AgentPlatform>,
    registry: AgentRegistry,
}

impl Dispatcher {
    pub fn new(platform: Arc<dyn AgentPlatform>, registry: AgentRegistry) -> Self {
        Self { platform, registry }
    }

    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// Build the prompt, send it to the agent (or team) behind `action` and
    /// wait for the answer
    pub async fn request(
        &self,
        query: &str,
        action: Action,
        village: Option<&str>,
        teacher: Option<&str>,
    ) -> ApplicationResult<AgentResponse> {
        let ctx = RequestContext::new();
        let target = self.registry.resolve(action)?;
        let prompt = build_prompt(query, village, teacher);
        debug!(request_id = %ctx.request_id, action = %action, prompt = %prompt, "Dispatching request");

        let result = match &target {
            DispatchTarget::Agent(agent) => self.platform.run_agent(&agent.id, &prompt).await,
            DispatchTarget::Team(id) => self.platform.run_team(id, &prompt).await,
        };

        match result {
            Ok(response) => {
                info!(
                    request_id = %ctx.request_id,
                    action = %action,
                    duration_ms = ctx.elapsed_ms(),
                    "Request completed"
                );
                Ok(response)
            }
            Err(e) => {
                error!(
                    request_id = %ctx.request_id,
                    action = %action,
                    duration_ms = ctx.elapsed_ms(),
                    error = %e,
                    "Request failed"
                );
                Err(e.into())
            }
        }
    }

    /// Send the canned request to every agent and the team, one after the
    /// other. A failing target does not stop the others.
    pub async fn smoke_test(&self) -> SmokeReport {
        let mut report = SmokeReport::default();

        for action in Action::ALL {
            let agent = target_name(action);
            let result = self
                .request(smoke_query(action), action, None, None)
                .await
                .map_err(|e| {
                    warn!(agent = agent, error = %e, "Smoke test failed");
                    e.to_string()
                });
            report.outcomes.push(SmokeOutcome {
                action,
                agent,
                result,
            });
        }

        report
    }
}
