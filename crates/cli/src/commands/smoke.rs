use super::CommandContext;
use crate::progress::ProgressType;
use anyhow::Result;
use application::{Dispatcher, SmokeReport};
use clap::Args;
use console::style;

/// Send a canned request to every agent and the team and print the answers
#[derive(Debug, Args)]
pub struct SmokeCommand;

impl SmokeCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        run_smoke_test(&ctx.dispatcher()?).await;
        Ok(())
    }
}

pub async fn run_smoke_test(dispatcher: &Dispatcher) -> SmokeReport {
    let spinner = ProgressType::Batch.create_spinner("Testing agents...");
    let report = dispatcher.smoke_test().await;
    spinner.finish_and_clear();
    print_smoke_report(&report);
    report
}

pub fn print_smoke_report(report: &SmokeReport) {
    for outcome in &report.outcomes {
        println!("\n{}", style(format!("Testing {}:", outcome.agent)).bold());
        match &outcome.result {
            Ok(response) => println!("{}", response),
            Err(e) => println!("{} {}", style("Error:").red(), e),
        }
    }
    if report.failures() > 0 {
        println!(
            "\n{}",
            style(format!(
                "{} of {} test requests failed",
                report.failures(),
                report.outcomes.len()
            ))
            .yellow()
        );
    }
}
