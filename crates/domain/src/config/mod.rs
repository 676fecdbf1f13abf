//! Program configuration
//!
//! Every setting has a default so that an empty document (or no file at all)
//! yields a working configuration against the hosted platform.

use crate::errors::DomainResult;
use crate::value_objects::{Role, ToolKind};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "rural-edu.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProgramConfig {
    #[serde(default)]
    pub platform: PlatformSettings,

    #[serde(default)]
    pub data: DataSettings,

    #[serde(default)]
    pub tools: ToolSettings,

    #[serde(default)]
    pub agents: AgentIds,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl ProgramConfig {
    /// Parse a TOML document
    pub fn from_toml_str(document: &str) -> DomainResult<Self> {
        Ok(toml::from_str(document)?)
    }
}

/// Connection to the hosted agent platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Language model used by every agent and the team
    #[serde(default = "default_llm_id")]
    pub llm_id: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PlatformSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            llm_id: default_llm_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,

    /// Upper bound on each rendered table inside a description (0 = no cap)
    #[serde(default = "default_max_table_chars")]
    pub max_table_chars: usize,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            max_table_chars: default_max_table_chars(),
        }
    }
}

/// Platform model ids backing each tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    #[serde(default = "default_speech_synthesis_model")]
    pub speech_synthesis_model: String,

    #[serde(default = "default_translation_model")]
    pub translation_model: String,
}

impl ToolSettings {
    pub fn model_for(&self, kind: ToolKind) -> &str {
        match kind {
            ToolKind::SpeechSynthesis => &self.speech_synthesis_model,
            ToolKind::Translation => &self.translation_model,
        }
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            speech_synthesis_model: default_speech_synthesis_model(),
            translation_model: default_translation_model(),
        }
    }
}

/// Remote identifiers assigned when the agents were provisioned
///
/// Each role falls back to the last deployment's id when left out of the
/// `[agents]` table; an empty string unregisters it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentIds {
    #[serde(
        default = "default_teacher_recruitment_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub teacher_recruitment: Option<String>,

    #[serde(
        default = "default_training_mentorship_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub training_mentorship: Option<String>,

    #[serde(
        default = "default_incentive_management_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub incentive_management: Option<String>,

    #[serde(
        default = "default_community_engagement_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub community_engagement: Option<String>,

    #[serde(
        default = "default_progress_monitoring_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress_monitoring: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

impl AgentIds {
    /// No agent registered
    pub fn empty() -> Self {
        Self {
            teacher_recruitment: None,
            training_mentorship: None,
            incentive_management: None,
            community_engagement: None,
            progress_monitoring: None,
            team: None,
        }
    }

    pub fn get(&self, role: Role) -> Option<&str> {
        let id = match role {
            Role::TeacherRecruitment => &self.teacher_recruitment,
            Role::TrainingMentorship => &self.training_mentorship,
            Role::IncentiveManagement => &self.incentive_management,
            Role::CommunityEngagement => &self.community_engagement,
            Role::ProgressMonitoring => &self.progress_monitoring,
        };
        id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn set(&mut self, role: Role, id: impl Into<String>) {
        let slot = match role {
            Role::TeacherRecruitment => &mut self.teacher_recruitment,
            Role::TrainingMentorship => &mut self.training_mentorship,
            Role::IncentiveManagement => &mut self.incentive_management,
            Role::CommunityEngagement => &mut self.community_engagement,
            Role::ProgressMonitoring => &mut self.progress_monitoring,
        };
        *slot = Some(id.into());
    }

    pub fn team(&self) -> Option<&str> {
        self.team.as_deref().filter(|id| !id.is_empty())
    }
}

impl Default for AgentIds {
    /// Identifiers from the last deployment of the program
    fn default() -> Self {
        Self {
            teacher_recruitment: default_teacher_recruitment_id(),
            training_mentorship: default_training_mentorship_id(),
            incentive_management: default_incentive_management_id(),
            community_engagement: default_community_engagement_id(),
            progress_monitoring: default_progress_monitoring_id(),
            team: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_base_url() -> String {
    "https://api.aixplain.com".to_string()
}

fn default_api_key_env() -> String {
    "AIXPLAIN_API_KEY".to_string()
}

fn default_llm_id() -> String {
    // GPT-4 on the platform
    "6646261c6eb563165658bbb1".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("SampleData")
}

fn default_max_table_chars() -> usize {
    20_000
}

fn default_speech_synthesis_model() -> String {
    "6171efa6159531495cadefc2".to_string()
}

fn default_translation_model() -> String {
    // OPUS-MT
    "61b097551efecf30109d32da".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_teacher_recruitment_id() -> Option<String> {
    Some("67e0fc32338999cb9696a93e".to_string())
}

fn default_training_mentorship_id() -> Option<String> {
    Some("67e0fc33338999cb9696a93f".to_string())
}

fn default_incentive_management_id() -> Option<String> {
    Some("67e0fc34181c58b7238ebd26".to_string())
}

fn default_community_engagement_id() -> Option<String> {
    Some("67e0fc35338999cb9696a940".to_string())
}

fn default_progress_monitoring_id() -> Option<String> {
    Some("67e0fc36338999cb9696a941".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = ProgramConfig::from_toml_str("").unwrap();
        assert_eq!(config, ProgramConfig::default());
        assert_eq!(config.data.dir, PathBuf::from("SampleData"));
        assert_eq!(config.platform.api_key_env, "AIXPLAIN_API_KEY");
        assert_eq!(
            config.agents.get(Role::ProgressMonitoring),
            Some("67e0fc36338999cb9696a941")
        );
        assert_eq!(config.agents.team(), None);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = ProgramConfig::from_toml_str(
            r#"
            [data]
            max_table_chars = 500

            [agents]
            team = "team-42"
            "#,
        )
        .unwrap();

        assert_eq!(config.data.max_table_chars, 500);
        assert_eq!(config.data.dir, PathBuf::from("SampleData"));
        assert_eq!(config.agents.team(), Some("team-42"));
        assert_eq!(
            config.agents.get(Role::TeacherRecruitment),
            Some("67e0fc32338999cb9696a93e")
        );
    }

    #[test]
    fn test_agents_table_overrides_per_role() {
        let config = ProgramConfig::from_toml_str(
            r#"
            [agents]
            incentive_management = "fresh-id"
            community_engagement = ""
            "#,
        )
        .unwrap();

        assert_eq!(config.agents.get(Role::IncentiveManagement), Some("fresh-id"));
        assert_eq!(config.agents.get(Role::CommunityEngagement), None);
        assert_eq!(
            config.agents.get(Role::ProgressMonitoring),
            Some("67e0fc36338999cb9696a941")
        );
    }

    #[test]
    fn test_blank_ids_are_unregistered() {
        let mut ids = AgentIds::empty();
        ids.set(Role::TrainingMentorship, "");
        assert_eq!(ids.get(Role::TrainingMentorship), None);
    }

    #[test]
    fn test_invalid_document() {
        let err = ProgramConfig::from_toml_str("[platform]\ntimeout_secs = \"soon\"").unwrap_err();
        assert!(err.to_string().starts_with("Invalid configuration"));
    }

    #[test]
    fn test_tool_models() {
        let tools = ToolSettings::default();
        assert_eq!(
            tools.model_for(ToolKind::SpeechSynthesis),
            "6171efa6159531495cadefc2"
        );
    }
}
