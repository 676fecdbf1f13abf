//! # Application Layer
//!
//! Workflows of the rural education program on top of the hosted platform:
//!
//! 1. **Loader** - reads the five CSV datasets and merges new records
//! 2. **Composer** - turns a role and its datasets into an agent description
//! 3. **Registry** - maps roles and the team to remote identifiers
//! 4. **Provisioning** - creates, refreshes and deploys agents in best-effort batches
//! 5. **Dispatch** - routes coordinator questions to the right agent
//!
//! ## Dependency Direction
//!
//! ```text
//! cli → application → platform → domain
//! ```

pub mod composer;
pub mod dispatch;
pub mod errors;
pub mod loader;
pub mod prompts;
pub mod provisioning;
pub mod registry;

pub use composer::PromptComposer;
pub use dispatch::{build_prompt, Dispatcher, SmokeOutcome, SmokeReport};
pub use errors::{ApplicationError, ApplicationResult};
pub use loader::{load_data, load_new_data, update_data, DataWarning, LoadReport};
pub use provisioning::{
    AgentProvisioner, BatchFailure, BatchReport, BatchSuccess, ProvisionReport,
};
pub use registry::{AgentRegistry, DispatchTarget};
