mod coerce;
mod validate;

use crate::Cli;
use crate::CommandResult;
use coerce::CoerceCmd;
use validate::ValidateCmd;

pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// Coerce JSON values to a GraphQL input type.
    Coerce(Box<CoerceCmd>),

    /// Validate the input types defined by a set of GraphQL schema files.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Coerce(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
