use crate::Cli;
use crate::CommandResult;

/// A subcommand of the `graphql` CLI. Commands report their outcome through
/// the returned [`CommandResult`] rather than printing directly.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
