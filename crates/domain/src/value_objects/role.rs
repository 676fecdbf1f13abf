//! Role - the five fixed agent roles of the program

use super::{DatasetKind, ToolKind};
use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Agent roles in the rural education program
///
/// The set is closed: adding or renaming a role means editing this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Finds and recruits educated rural youth as part-time teachers
    TeacherRecruitment,
    /// Provides teaching material and ongoing mentorship
    TrainingMentorship,
    /// Tracks participation and allocates non-monetary incentives
    IncentiveManagement,
    /// Connects teachers, parents and village elders
    CommunityEngagement,
    /// Tracks attendance, learning outcomes and program growth
    ProgressMonitoring,
}

impl Role {
    /// All roles in coordinator menu order
    pub const ALL: [Role; 5] = [
        Role::TeacherRecruitment,
        Role::TrainingMentorship,
        Role::IncentiveManagement,
        Role::CommunityEngagement,
        Role::ProgressMonitoring,
    ];

    /// Configuration key of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::TeacherRecruitment => "teacher_recruitment",
            Role::TrainingMentorship => "training_mentorship",
            Role::IncentiveManagement => "incentive_management",
            Role::CommunityEngagement => "community_engagement",
            Role::ProgressMonitoring => "progress_monitoring",
        }
    }

    /// Agent name registered on the platform
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::TeacherRecruitment => "Teacher Recruitment Agent",
            Role::TrainingMentorship => "Training and Mentorship Agent",
            Role::IncentiveManagement => "Incentive Management Agent",
            Role::CommunityEngagement => "Community Engagement Agent",
            Role::ProgressMonitoring => "Progress Monitoring Agent",
        }
    }

    /// Short action name used by the coordinator
    pub fn action_alias(&self) -> &'static str {
        match self {
            Role::TeacherRecruitment => "recruitment",
            Role::TrainingMentorship => "training",
            Role::IncentiveManagement => "incentives",
            Role::CommunityEngagement => "community",
            Role::ProgressMonitoring => "progress",
        }
    }

    /// Datasets embedded in the role description, in embedding order
    pub fn datasets(&self) -> &'static [DatasetKind] {
        match self {
            Role::TeacherRecruitment => &[DatasetKind::Teacher, DatasetKind::Community],
            Role::TrainingMentorship => &[DatasetKind::Training],
            Role::IncentiveManagement => &[DatasetKind::Incentives, DatasetKind::Teacher],
            Role::CommunityEngagement => &[DatasetKind::Community],
            Role::ProgressMonitoring => &[
                DatasetKind::Student,
                DatasetKind::Teacher,
                DatasetKind::Community,
            ],
        }
    }

    /// Remote tools attached to the role's agent
    pub fn tools(&self) -> &'static [ToolKind] {
        match self {
            Role::TrainingMentorship => &[ToolKind::SpeechSynthesis],
            Role::CommunityEngagement => &[ToolKind::Translation, ToolKind::SpeechSynthesis],
            _ => &[],
        }
    }

    /// Parse from configuration key or action alias
    pub fn parse_str(s: &str) -> Result<Self, DomainError> {
        let needle = s.trim().to_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == needle || role.action_alias() == needle)
            .ok_or_else(|| DomainError::UnknownRole(s.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
