use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::commands::{
    AskCommand, CommandContext, DataCommand, DescribeCommand, ProvisionCommand, RefreshCommand,
    SmokeCommand,
};
use cli::config::{load_config, logging_config};
use cli::Coordinator;
use common::init_structured_logging;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rural-edu")]
#[command(about = "Agents for the rural education program on a hosted agent platform")]
#[command(version)]
struct Cli {
    /// Configuration file (default: rural-edu.toml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding the CSV datasets (overrides [data] dir)
    #[arg(short, long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise the loaded datasets
    Data(DataCommand),
    /// Create the five agents and the team, then deploy them
    Provision(ProvisionCommand),
    /// Push freshly composed descriptions to the registered agents
    Refresh(RefreshCommand),
    /// Send a single request to an agent or the team
    Ask(AskCommand),
    /// Interactive coordinator interface (default)
    Coordinator,
    /// Print the composed description of one agent
    Describe(DescribeCommand),
    /// Send a canned request to every registered agent and the team
    Smoke(SmokeCommand),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_structured_logging(logging_config(&config.logging)?)?;

    let ctx = CommandContext::new(config, cli.data_dir);

    match cli.command.unwrap_or(Commands::Coordinator) {
        Commands::Data(cmd) => cmd.execute(&ctx).await,
        Commands::Provision(cmd) => cmd.execute(&ctx).await,
        Commands::Refresh(cmd) => cmd.execute(&ctx).await,
        Commands::Ask(cmd) => cmd.execute(&ctx).await,
        Commands::Describe(cmd) => cmd.execute(&ctx).await,
        Commands::Smoke(cmd) => cmd.execute(&ctx).await,
        Commands::Coordinator => {
            let dispatcher = ctx.dispatcher()?;
            let stdin = io::stdin();
            Coordinator::new(&dispatcher, stdin.lock(), io::stdout())
                .run()
                .await
        }
    }
}
