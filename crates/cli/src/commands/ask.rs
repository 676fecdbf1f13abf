use super::CommandContext;
use crate::progress::ProgressType;
use anyhow::Result;
use clap::Args;
use domain::Action;

pub const SAMPLE_QUERY: &str = "Find qualified female teachers for mathematics education";
pub const SAMPLE_VILLAGE: &str = "V001";

/// Send one request to an agent or the team and print the answer
#[derive(Debug, Args)]
pub struct AskCommand {
    /// recruitment, training, incentives, community, progress or full_cycle
    #[arg(short, long, default_value = "recruitment")]
    pub action: Action,

    /// Village the request is about
    #[arg(short, long)]
    pub village: Option<String>,

    /// Teacher the request is about
    #[arg(short, long)]
    pub teacher: Option<String>,

    /// Question or request; without one a sample recruitment query is sent
    pub query: Option<String>,
}

impl AskCommand {
    /// Query, village and teacher to send, substituting the sample request
    /// when no query was given
    pub fn request(&self) -> (String, Option<String>, Option<String>) {
        match &self.query {
            Some(query) => (query.clone(), self.village.clone(), self.teacher.clone()),
            None => (
                SAMPLE_QUERY.to_string(),
                self.village.clone().or_else(|| Some(SAMPLE_VILLAGE.to_string())),
                self.teacher.clone(),
            ),
        }
    }

    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let dispatcher = ctx.dispatcher()?;
        let (query, village, teacher) = self.request();

        let spinner = ProgressType::Remote.create_spinner("Processing your request...");
        let response = dispatcher
            .request(&query, self.action, village.as_deref(), teacher.as_deref())
            .await;
        spinner.finish_and_clear();

        println!("{}", response?);
        Ok(())
    }
}
