//! Subcommands of `rural-edu`

pub mod agents;
pub mod ask;
pub mod data;
pub mod describe;
pub mod smoke;

pub use agents::{ProvisionCommand, RefreshCommand};
pub use ask::AskCommand;
pub use data::DataCommand;
pub use describe::DescribeCommand;
pub use smoke::SmokeCommand;

use crate::progress::ProgressType;
use anyhow::Result;
use application::{load_data, AgentRegistry, Dispatcher};
use console::style;
use domain::{Datasets, ProgramConfig};
use platform::{AgentPlatform, HttpAgentPlatform};
use std::path::PathBuf;
use std::sync::Arc;

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: ProgramConfig,
    pub data_dir: PathBuf,
}

impl CommandContext {
    /// `data_dir` overrides `[data] dir` from the configuration
    pub fn new(config: ProgramConfig, data_dir: Option<PathBuf>) -> Self {
        let data_dir = data_dir.unwrap_or_else(|| config.data.dir.clone());
        Self { config, data_dir }
    }

    pub fn registry(&self) -> AgentRegistry {
        AgentRegistry::from_config(&self.config)
    }

    /// HTTP client for the hosted platform; fails when the API key is not set
    pub fn platform(&self) -> Result<Arc<dyn AgentPlatform>> {
        let platform = HttpAgentPlatform::from_settings(&self.config.platform)?;
        Ok(Arc::new(platform))
    }

    pub fn dispatcher(&self) -> Result<Dispatcher> {
        Ok(Dispatcher::new(self.platform()?, self.registry()))
    }

    /// Load the datasets, echoing missing-file warnings to the console
    pub fn load_datasets(&self) -> Result<Datasets> {
        let spinner = ProgressType::Data.create_spinner("Loading existing data...");
        let report = load_data(&self.data_dir);
        spinner.finish_and_clear();

        let report = report?;
        for warning in &report.warnings {
            println!("{}", style(warning).yellow());
        }
        Ok(report.datasets)
    }
}
