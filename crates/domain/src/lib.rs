//! Domain Layer - rural education program model
//!
//! Contains only the program's vocabulary, free of network or file system
//! concerns:
//! - Value Objects: the fixed roles, datasets, tools and coordinator actions
//! - Entities: tabular datasets and the agent/team records exchanged with the
//!   hosted platform
//! - Config: the explicit configuration passed into every entry point

pub mod config;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use config::{
    AgentIds, DataSettings, LoggingSettings, PlatformSettings, ProgramConfig, ToolSettings,
    DEFAULT_CONFIG_FILE,
};
pub use entities::{
    AgentRef, AgentResponse, AgentSpec, Datasets, RemoteAgent, RemoteTeam, Table, TeamSpec,
    ToolBinding,
};
pub use errors::{DomainError, DomainResult};
pub use value_objects::{Action, DatasetKind, Role, ToolKind};
