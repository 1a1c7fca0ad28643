use clap::CommandFactory;
use crate::commands;
use gql_complexity::batch;

#[derive(clap::Parser, Debug)]
#[command(
    about = "Utilities for analyzing GraphQL operations against a schema.",
    name = "gql",
    version,
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        default_value=batch::DEFAULT_SCHEMA_PATTERN,
        global=true,
        help="Glob pattern matching the GraphQL schema (SDL) files to load, \
             relative to --root. All matching files are combined into one \
             schema.",
        long,
        short='s',
    )]
    pub schema: String,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
