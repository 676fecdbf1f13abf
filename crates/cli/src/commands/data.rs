use super::CommandContext;
use anyhow::Result;
use clap::Args;
use console::style;
use domain::DatasetKind;

/// Summarise the datasets found in the data directory
#[derive(Debug, Args)]
pub struct DataCommand;

impl DataCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let datasets = ctx.load_datasets()?;

        println!(
            "{} {}",
            style("Data directory:").bold(),
            ctx.data_dir.display()
        );
        for kind in DatasetKind::ALL {
            match datasets.get(kind) {
                Some(table) => println!(
                    "  {:<20} {:>6} rows  {:>3} columns",
                    kind.file_name(),
                    table.row_count(),
                    table.column_count()
                ),
                None => println!("  {:<20} {}", kind.file_name(), style("missing").dim()),
            }
        }
        println!("{} of {} datasets loaded", datasets.len(), DatasetKind::ALL.len());
        Ok(())
    }
}
