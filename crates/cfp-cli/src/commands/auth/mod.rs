mod login;
mod logout;
mod status;
mod whoami;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `cfp auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login { email, password } => login::handle(email, password, ctx, flags).await,
        AuthCommands::Logout => logout::handle(flags),
        AuthCommands::Status => status::handle(ctx, flags),
        AuthCommands::Whoami => whoami::handle(ctx, flags).await,
    }
}
