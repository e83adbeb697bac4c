mod typecase;

use crate::Cli;
use crate::CommandResult;
use typecase::TypeCaseCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Resolve the concrete type of GraphQL response entities and check which
    /// type cases they can be narrowed to.
    #[command(name = "typecase")]
    TypeCase(Box<TypeCaseCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::TypeCase(cmd) => cmd.run(cli).await
        }
    }
}
