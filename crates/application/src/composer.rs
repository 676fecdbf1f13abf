//! Agent descriptions built from role narratives and dataset renderings

use crate::prompts::{self, TEAM_NAME, TEAM_NARRATIVE, TEACHING_METHODS_GUIDANCE};
use domain::{AgentSpec, Datasets, ProgramConfig, Role, Table, TeamSpec, ToolBinding, ToolSettings};

/// Builds the text and tool bindings the platform receives for each role
#[derive(Debug, Clone)]
pub struct PromptComposer {
    max_table_chars: usize,
    tools: ToolSettings,
}

impl PromptComposer {
    /// `max_table_chars` caps every embedded table (0 = no cap)
    pub fn new(max_table_chars: usize, tools: ToolSettings) -> Self {
        Self {
            max_table_chars,
            tools,
        }
    }

    pub fn from_config(config: &ProgramConfig) -> Self {
        Self::new(config.data.max_table_chars, config.tools.clone())
    }

    /// Role narrative followed by each referenced dataset. Never fails:
    /// absent datasets render as the empty-table placeholder.
    pub fn describe(&self, role: Role, datasets: &Datasets) -> String {
        let empty = Table::default();
        let mut description = prompts::narrative(role).to_string();

        for kind in role.datasets() {
            let table = datasets.get(*kind).unwrap_or(&empty);
            description.push_str(&format!(
                "\n\nHere's the {} data you have access to:\n{}",
                kind.label(),
                table.render_capped(self.max_table_chars)
            ));
        }

        if role == Role::TrainingMentorship {
            description.push_str("\n\n");
            description.push_str(TEACHING_METHODS_GUIDANCE);
        }

        description
    }

    pub fn tools_for(&self, role: Role) -> Vec<ToolBinding> {
        role.tools()
            .iter()
            .map(|kind| ToolBinding::new(*kind, self.tools.model_for(*kind)))
            .collect()
    }

    pub fn agent_spec(&self, role: Role, datasets: &Datasets, llm_id: &str) -> AgentSpec {
        AgentSpec {
            name: role.display_name().to_string(),
            description: self.describe(role, datasets),
            tools: self.tools_for(role),
            llm_id: llm_id.to_string(),
        }
    }

    pub fn team_spec(&self, agent_ids: Vec<String>, llm_id: &str) -> TeamSpec {
        TeamSpec {
            name: TEAM_NAME.to_string(),
            description: Self::team_description().to_string(),
            agent_ids,
            llm_id: llm_id.to_string(),
        }
    }

    pub fn team_description() -> &'static str {
        TEAM_NARRATIVE
    }
}
