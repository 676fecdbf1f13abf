use super::CommandContext;
use anyhow::Result;
use application::PromptComposer;
use clap::Args;
use domain::Role;

/// Print the description an agent would receive, without contacting the platform
#[derive(Debug, Args)]
pub struct DescribeCommand {
    /// Role (teacher_recruitment, training_mentorship, ...) or its action alias
    pub role: String,

    /// Also list the tool bindings
    #[arg(long)]
    pub tools: bool,
}

impl DescribeCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let role = Role::parse_str(&self.role)?;
        let datasets = ctx.load_datasets()?;
        let composer = PromptComposer::from_config(&ctx.config);

        println!("{}", composer.describe(role, &datasets));
        if self.tools {
            println!();
            for tool in composer.tools_for(role) {
                println!("tool {}: {}", tool.model_id, tool.description);
            }
        }
        Ok(())
    }
}
