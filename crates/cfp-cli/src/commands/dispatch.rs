use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Issue { action } => commands::issue::handle(&action, ctx, flags).await,
        Commands::Ai { action } => commands::ai::handle(&action, ctx, flags).await,
        Commands::Tickets { .. } | Commands::Sitemap(_) | Commands::Schema(_) => {
            unreachable!("tickets/sitemap/schema are pre-dispatched in main")
        }
    }
}
