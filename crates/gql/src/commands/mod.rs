mod complexity;

use crate::Cli;
use crate::CommandResult;
use complexity::ComplexityCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// Report the complexity of every operation, before and after fragments
    /// are flattened.
    Complexity(Box<ComplexityCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Complexity(cmd) => cmd.run(cli).await
        }
    }
}
