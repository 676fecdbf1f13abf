//! Registry of remote identifiers, passed explicitly to every workflow

use crate::errors::{ApplicationError, ApplicationResult};
use domain::{Action, AgentIds, AgentRef, ProgramConfig, Role};

/// Where a coordinator request goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchTarget {
    Agent(AgentRef),
    Team(String),
}

/// Role (and team) to remote identifier mapping
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRegistry {
    ids: AgentIds,
}

impl AgentRegistry {
    pub fn new(ids: AgentIds) -> Self {
        Self { ids }
    }

    pub fn from_config(config: &ProgramConfig) -> Self {
        Self::new(config.agents.clone())
    }

    pub fn ids(&self) -> &AgentIds {
        &self.ids
    }

    pub fn agent_id(&self, role: Role) -> Option<&str> {
        self.ids.get(role)
    }

    pub fn team_id(&self) -> Option<&str> {
        self.ids.team()
    }

    /// Registered roles in menu order
    pub fn registered_agents(&self) -> Vec<AgentRef> {
        Role::ALL
            .into_iter()
            .filter_map(|role| {
                self.agent_id(role).map(|id| AgentRef {
                    role,
                    id: id.to_string(),
                })
            })
            .collect()
    }

    pub fn resolve(&self, action: Action) -> ApplicationResult<DispatchTarget> {
        match action {
            Action::Role(role) => self
                .agent_id(role)
                .map(|id| {
                    DispatchTarget::Agent(AgentRef {
                        role,
                        id: id.to_string(),
                    })
                })
                .ok_or_else(|| ApplicationError::Unregistered(action.to_string())),
            Action::FullCycle => self
                .team_id()
                .map(|id| DispatchTarget::Team(id.to_string()))
                .ok_or_else(|| ApplicationError::Unregistered(action.to_string())),
        }
    }

    /// Resolve an action given by name (`recruitment`, ..., `full_cycle`)
    pub fn resolve_str(&self, action: &str) -> ApplicationResult<DispatchTarget> {
        self.resolve(Action::parse_str(action)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> AgentRegistry {
        let mut ids = AgentIds::empty();
        ids.set(Role::TeacherRecruitment, "agent-r");
        ids.set(Role::ProgressMonitoring, "agent-p");
        ids.team = Some("team-1".to_string());
        AgentRegistry::new(ids)
    }

    #[test]
    fn test_resolve_role_and_team() {
        let registry = registry();
        assert_eq!(
            registry.resolve_str("recruitment").unwrap(),
            DispatchTarget::Agent(AgentRef {
                role: Role::TeacherRecruitment,
                id: "agent-r".to_string()
            })
        );
        assert_eq!(
            registry.resolve(Action::FullCycle).unwrap(),
            DispatchTarget::Team("team-1".to_string())
        );
    }

    #[test]
    fn test_unregistered_and_unknown() {
        let registry = registry();
        let err = registry.resolve_str("training").unwrap_err();
        assert_eq!(err.to_string(), "No agent registered for training");

        let err = registry.resolve_str("catering").unwrap_err();
        assert!(err.to_string().contains("Unknown action type: catering"));
    }

    #[test]
    fn test_registered_agents_in_menu_order() {
        let roles: Vec<_> = registry()
            .registered_agents()
            .into_iter()
            .map(|agent| agent.role)
            .collect();
        assert_eq!(roles, vec![Role::TeacherRecruitment, Role::ProgressMonitoring]);
    }

    #[test]
    fn test_team_optional() {
        let registry = AgentRegistry::new(AgentIds::empty());
        assert!(matches!(
            registry.resolve(Action::FullCycle),
            Err(ApplicationError::Unregistered(_))
        ));
    }
}
