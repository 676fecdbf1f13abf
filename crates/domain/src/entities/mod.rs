//! Domain Entities - tables and platform records

pub mod agent;
pub mod datasets;
pub mod table;

pub use agent::{AgentRef, AgentResponse, AgentSpec, RemoteAgent, RemoteTeam, TeamSpec, ToolBinding};
pub use datasets::Datasets;
pub use table::Table;
