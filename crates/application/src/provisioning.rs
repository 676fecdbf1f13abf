//! Create, refresh and deploy the remote agents
//!
//! Creation is all-or-nothing up to the team: a team cannot be formed
//! without every role agent. Everything after that (deploys, refreshes) is
//! best effort and collected in a [`BatchReport`].

use crate::composer::PromptComposer;
use crate::errors::{ApplicationError, ApplicationResult};
use crate::prompts::TEAM_NAME;
use crate::registry::AgentRegistry;
use common::OperationTimer;
use domain::{AgentIds, AgentRef, Datasets, ProgramConfig, RemoteTeam, Role};
use platform::{AgentPlatform, PlatformResult};
use std::fmt;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSuccess {
    pub agent: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    pub agent: String,
    pub error: String,
}

/// Per-agent outcome of a best-effort batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub operation: String,
    pub succeeded: Vec<BatchSuccess>,
    pub failed: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            ..Self::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// Id recorded for a successful agent, e.g. the deployed id
    pub fn succeeded_id(&self, agent: &str) -> Option<&str> {
        self.succeeded
            .iter()
            .find(|success| success.agent == agent)
            .map(|success| success.id.as_str())
    }

    /// `Err` summarising the failures, for operation logging
    pub fn outcome(&self) -> Result<(), String> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(format!(
                "{} of {} {} operations failed",
                self.failed.len(),
                self.attempted(),
                self.operation
            ))
        }
    }

    /// Record an operation that keeps the agent's id
    fn record<T>(&mut self, agent: &str, id: &str, result: PlatformResult<T>) {
        self.record_id(agent, result.map(|_| id.to_string()));
    }

    /// Record an operation that answers with a (possibly new) id
    fn record_id(&mut self, agent: &str, result: PlatformResult<String>) {
        match result {
            Ok(id) => {
                info!(agent = agent, id = %id, "{} succeeded", self.operation);
                self.succeeded.push(BatchSuccess {
                    agent: agent.to_string(),
                    id,
                });
            }
            Err(e) => self.fail(agent, e),
        }
    }

    fn fail(&mut self, agent: &str, e: impl fmt::Display) {
        error!(agent = agent, error = %e, "Error during {} of {}", self.operation, agent);
        self.failed.push(BatchFailure {
            agent: agent.to_string(),
            error: e.to_string(),
        });
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for success in &self.succeeded {
            writeln!(f, "{}: {} ({})", self.operation, success.agent, success.id)?;
        }
        for failure in &self.failed {
            writeln!(
                f,
                "Error during {} of {}: {}",
                self.operation, failure.agent, failure.error
            )?;
        }
        write!(
            f,
            "{} of {} {} operations succeeded",
            self.succeeded.len(),
            self.attempted(),
            self.operation
        )
    }
}

/// Outcome of the create path
#[derive(Debug, Clone)]
pub struct ProvisionReport {
    pub agents: Vec<AgentRef>,
    pub team: RemoteTeam,
    pub deployment: BatchReport,
}

impl ProvisionReport {
    /// Registry entries for the new agents and team: the deployed ids, or
    /// the creation ids where deployment failed
    pub fn agent_ids(&self) -> AgentIds {
        let mut ids = AgentIds::empty();
        for agent in &self.agents {
            let id = self
                .deployment
                .succeeded_id(agent.role.display_name())
                .unwrap_or(agent.id.as_str());
            ids.set(agent.role, id);
        }
        let team = self
            .deployment
            .succeeded_id(TEAM_NAME)
            .unwrap_or(self.team.id.as_str());
        ids.team = Some(team.to_string());
        ids
    }
}

pub struct AgentProvisioner {
    platform: Arc<dyn AgentPlatform>,
    composer: PromptComposer,
    llm_id: String,
}

impl AgentProvisioner {
    pub fn new(
        platform: Arc<dyn AgentPlatform>,
        composer: PromptComposer,
        llm_id: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            composer,
            llm_id: llm_id.into(),
        }
    }

    pub fn from_config(platform: Arc<dyn AgentPlatform>, config: &ProgramConfig) -> Self {
        Self::new(
            platform,
            PromptComposer::from_config(config),
            config.platform.llm_id.clone(),
        )
    }

    pub fn composer(&self) -> &PromptComposer {
        &self.composer
    }

    /// Create all five agents and the team, then deploy each of them.
    pub async fn provision(&self, datasets: &Datasets) -> ApplicationResult<ProvisionReport> {
        let mut timer = OperationTimer::new("provision");

        let mut agents = Vec::with_capacity(Role::ALL.len());
        for role in Role::ALL {
            let spec = self.composer.agent_spec(role, datasets, &self.llm_id);
            let created = self
                .platform
                .create_agent(&spec)
                .await
                .map_err(|source| ApplicationError::Provision {
                    agent: role.display_name().to_string(),
                    source,
                })?;
            info!(agent = role.display_name(), id = %created.id, "Created agent");
            agents.push(AgentRef {
                role,
                id: created.id,
            });
        }

        let team_spec = self.composer.team_spec(
            agents.iter().map(|agent| agent.id.clone()).collect(),
            &self.llm_id,
        );
        let team = self
            .platform
            .create_team(&team_spec)
            .await
            .map_err(|source| ApplicationError::Provision {
                agent: TEAM_NAME.to_string(),
                source,
            })?;
        info!(team = %team.id, "Created team");

        let mut deployment = BatchReport::new("deploy");
        for agent in &agents {
            let result = self.platform.deploy_agent(&agent.id).await;
            deployment.record_id(agent.role.display_name(), result);
        }
        let result = self.platform.deploy_team(&team.id).await;
        deployment.record_id(TEAM_NAME, result);

        timer.add_field("agents", agents.len());
        timer.add_field("failures", deployment.failed.len());
        timer.finish_with_result(deployment.outcome());

        Ok(ProvisionReport {
            agents,
            team,
            deployment,
        })
    }

    /// Re-compose every registered agent's description and tools and push
    /// them to the platform. Unregistered roles are recorded as failures.
    pub async fn refresh(&self, datasets: &Datasets, registry: &AgentRegistry) -> BatchReport {
        let mut timer = OperationTimer::new("refresh");
        let mut report = BatchReport::new("update");

        for role in Role::ALL {
            let name = role.display_name();
            let Some(id) = registry.agent_id(role) else {
                report.fail(name, ApplicationError::Unregistered(role.action_alias().to_string()));
                continue;
            };

            let mut agent = match self.platform.get_agent(id).await {
                Ok(agent) => agent,
                Err(e) => {
                    report.fail(name, e);
                    continue;
                }
            };
            agent.description = self.composer.describe(role, datasets);
            agent.tools = self.composer.tools_for(role);

            let result = self.platform.update_agent(&agent).await;
            report.record(name, id, result);
        }

        timer.add_field("failures", report.failed.len());
        timer.finish_with_result(report.outcome());
        report
    }

    /// Deploy every registered agent, then the team if one is registered.
    pub async fn deploy(&self, registry: &AgentRegistry) -> BatchReport {
        let mut timer = OperationTimer::new("deploy");
        let mut report = BatchReport::new("deploy");

        for agent in registry.registered_agents() {
            let result = self.platform.deploy_agent(&agent.id).await;
            report.record_id(agent.role.display_name(), result);
        }
        if let Some(team) = registry.team_id() {
            let result = self.platform.deploy_team(team).await;
            report.record_id(TEAM_NAME, result);
        }

        timer.add_field("failures", report.failed.len());
        timer.finish_with_result(report.outcome());
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_summary() {
        let mut report = BatchReport::new("update");
        report.record::<()>("Teacher Recruitment Agent", "a1", Ok(()));
        report.fail("Progress Monitoring Agent", "timeout");

        assert!(!report.is_complete());
        assert_eq!(report.attempted(), 2);
        let text = report.to_string();
        assert!(text.contains("Error during update of Progress Monitoring Agent: timeout"));
        assert!(text.ends_with("1 of 2 update operations succeeded"));
        assert_eq!(
            report.outcome(),
            Err("1 of 2 update operations failed".to_string())
        );
        assert_eq!(report.succeeded_id("Teacher Recruitment Agent"), Some("a1"));
    }

    #[test]
    fn test_deployed_id_replaces_agent_id() {
        let mut report = BatchReport::new("deploy");
        report.record_id("Rural Education Team", Ok("deployed-team".to_string()));

        assert!(report.outcome().is_ok());
        assert_eq!(report.succeeded[0].id, "deployed-team");
    }
}
