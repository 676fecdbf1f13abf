//! Action - what the coordinator can ask for

use super::Role;
use crate::errors::DomainError;
use std::fmt;

/// Coordinator action: one role agent or the whole team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Role(Role),
    /// Complete implementation plan from the team agent
    FullCycle,
}

impl Action {
    /// All actions in menu order (menu entries 1..=6)
    pub const ALL: [Action; 6] = [
        Action::Role(Role::TeacherRecruitment),
        Action::Role(Role::TrainingMentorship),
        Action::Role(Role::IncentiveManagement),
        Action::Role(Role::CommunityEngagement),
        Action::Role(Role::ProgressMonitoring),
        Action::FullCycle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Role(role) => role.action_alias(),
            Action::FullCycle => "full_cycle",
        }
    }

    /// One-line menu caption
    pub fn summary(&self) -> &'static str {
        match self {
            Action::Role(Role::TeacherRecruitment) => "Find and recruit teachers",
            Action::Role(Role::TrainingMentorship) => "Get training resources and guidance",
            Action::Role(Role::IncentiveManagement) => "Manage teacher incentives",
            Action::Role(Role::CommunityEngagement) => "Community engagement strategies",
            Action::Role(Role::ProgressMonitoring) => "Monitor student and program progress",
            Action::FullCycle => "Complete implementation plan",
        }
    }

    /// Whether the coordinator offers a teacher identifier for this action
    pub fn accepts_teacher(&self) -> bool {
        matches!(
            self,
            Action::Role(Role::TrainingMentorship) | Action::Role(Role::IncentiveManagement)
        )
    }

    pub fn parse_str(s: &str) -> Result<Self, DomainError> {
        let needle = s.trim().to_lowercase();
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == needle)
            .ok_or_else(|| DomainError::UnknownAction(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::parse_str(s)
    }
}
