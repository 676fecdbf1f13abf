//! Create and refresh the remote agents

use super::smoke::run_smoke_test;
use super::CommandContext;
use crate::progress::ProgressType;
use anyhow::Result;
use application::{
    load_new_data, update_data, AgentProvisioner, AgentRegistry, BatchReport, Dispatcher,
};
use clap::Args;
use console::style;
use domain::AgentIds;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct RegistrySnippet<'a> {
    agents: &'a AgentIds,
}

/// Registry section to paste into `rural-edu.toml`
pub fn registry_snippet(ids: &AgentIds) -> Result<String> {
    Ok(toml::to_string(&RegistrySnippet { agents: ids })?)
}

fn print_report(report: &BatchReport) {
    for success in &report.succeeded {
        println!(
            "{} {} {} ({})",
            style("✓").green(),
            report.operation,
            success.agent,
            success.id
        );
    }
    for failure in &report.failed {
        println!(
            "{} Error during {} of {}: {}",
            style("✗").red(),
            report.operation,
            failure.agent,
            failure.error
        );
    }
}

/// Create all agents and the team from the current data, then deploy them
#[derive(Debug, Args)]
pub struct ProvisionCommand {
    /// Send a canned request to every new agent and the team afterwards
    #[arg(long)]
    pub smoke_test: bool,
}

impl ProvisionCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let datasets = ctx.load_datasets()?;
        let platform = ctx.platform()?;
        let provisioner = AgentProvisioner::from_config(platform.clone(), &ctx.config);

        let spinner = ProgressType::Batch.create_spinner("Creating agents and team...");
        let report = match provisioner.provision(&datasets).await {
            Ok(report) => {
                spinner.finish_success("Agents and team created");
                report
            }
            Err(e) => {
                spinner.finish_error("Provisioning aborted");
                return Err(e.into());
            }
        };

        print_report(&report.deployment);
        let ids = report.agent_ids();

        if self.smoke_test {
            let dispatcher = Dispatcher::new(platform, AgentRegistry::new(ids.clone()));
            run_smoke_test(&dispatcher).await;
        }

        println!();
        println!("{}", style("Agent IDs for reference:").bold());
        print!("{}", registry_snippet(&ids)?);
        Ok(())
    }
}

/// Re-compose agent descriptions from the data (optionally merged with new
/// records) and push them to the platform
#[derive(Debug, Args)]
pub struct RefreshCommand {
    /// Directory of new CSV records to append before refreshing
    #[arg(long, value_name = "DIR")]
    pub new_data: Option<PathBuf>,

    /// Update descriptions without redeploying
    #[arg(long)]
    pub skip_deploy: bool,
}

impl RefreshCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let mut datasets = ctx.load_datasets()?;

        if let Some(dir) = &self.new_data {
            let new_data = load_new_data(dir)?;
            for warning in update_data(&mut datasets, new_data) {
                println!("{}", style(warning).yellow());
            }
        }

        let registry = ctx.registry();
        let provisioner = AgentProvisioner::from_config(ctx.platform()?, &ctx.config);

        let spinner = ProgressType::Batch.create_spinner("Updating agents with new data...");
        let updated = provisioner.refresh(&datasets, &registry).await;
        spinner.finish_and_clear();
        print_report(&updated);

        let mut complete = updated.is_complete();
        if !self.skip_deploy {
            let spinner = ProgressType::Batch.create_spinner("Deploying updated agents...");
            let deployed = provisioner.deploy(&registry).await;
            spinner.finish_and_clear();
            print_report(&deployed);
            complete &= deployed.is_complete();
        }

        println!();
        if complete {
            println!(
                "{}",
                style("Update complete! All agents have been updated with new data.").green()
            );
        } else {
            println!(
                "{}",
                style("Update finished with errors; see the messages above.").yellow()
            );
        }
        Ok(())
    }
}
