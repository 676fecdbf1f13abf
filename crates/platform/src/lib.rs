//! Client side of the hosted agent platform
//!
//! The platform owns agent lifecycle, tool execution and inference. This
//! crate only describes the operations the program needs ([`AgentPlatform`])
//! and implements them over HTTP ([`HttpAgentPlatform`]).

use async_trait::async_trait;
use domain::{AgentResponse, AgentSpec, RemoteAgent, RemoteTeam, TeamSpec};

mod errors;
pub mod http_platform;

pub use errors::{PlatformError, PlatformResult};
pub use http_platform::HttpAgentPlatform;

/// Operations on remote agents and teams
///
/// Every call completes (or fails) before returning; nothing is retried.
#[async_trait]
pub trait AgentPlatform: Send + Sync {
    /// Create a new agent from scratch
    async fn create_agent(&self, spec: &AgentSpec) -> PlatformResult<RemoteAgent>;

    /// Fetch an existing agent by identifier
    async fn get_agent(&self, id: &str) -> PlatformResult<RemoteAgent>;

    /// Push a modified agent (description, tools) back to the platform
    async fn update_agent(&self, agent: &RemoteAgent) -> PlatformResult<()>;

    /// Deploy an agent, returning the deployed identifier
    async fn deploy_agent(&self, id: &str) -> PlatformResult<String>;

    /// Compose a team from existing agents
    async fn create_team(&self, spec: &TeamSpec) -> PlatformResult<RemoteTeam>;

    async fn deploy_team(&self, id: &str) -> PlatformResult<String>;

    /// Send a free-text prompt to an agent and wait for its answer
    async fn run_agent(&self, id: &str, prompt: &str) -> PlatformResult<AgentResponse>;

    async fn run_team(&self, id: &str, prompt: &str) -> PlatformResult<AgentResponse>;
}
