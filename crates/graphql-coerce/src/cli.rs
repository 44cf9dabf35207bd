use clap::CommandFactory;
use crate::commands;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[derive(clap::Parser, Debug)]
#[command(
    about = "Validate GraphQL input types and coerce JSON values against them.",
    name = "graphql-coerce",
    version,
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Enable verbose output. Overrides the `LOG_LEVEL` environment \
             variable.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// The level to log at, along with a warning to be logged once logging
    /// is set up if `LOG_LEVEL` held an unrecognized value.
    pub(crate) fn log_level(&self) -> (tracing::Level, Option<String>) {
        if self.verbose {
            return (tracing::Level::DEBUG, None);
        }

        let Ok(env_val) = std::env::var("LOG_LEVEL") else {
            return (DEFAULT_LOG_LEVEL, None);
        };
        match env_val.trim() {
            "DEBUG" | "debug" | "VERBOSE" | "verbose" => (tracing::Level::DEBUG, None),
            "INFO" | "info" => (tracing::Level::INFO, None),
            "TRACE" | "trace" => (tracing::Level::TRACE, None),
            other => (DEFAULT_LOG_LEVEL, Some(format!(
                "Invalid `LOG_LEVEL` environment variable value: `{other}`"
            ))),
        }
    }

    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
