mod get;
mod list;
mod respond;
mod stats;
mod status;
mod submit;
mod track;
mod watch;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::IssueCommands;
use crate::context::AppContext;

/// Handle `cfp issue <subcommand>`.
pub async fn handle(
    action: &IssueCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        IssueCommands::Submit(args) => submit::handle(args, ctx, flags).await,
        IssueCommands::Track { ticket_id, offline } => {
            track::handle(ticket_id, *offline, ctx, flags).await
        }
        IssueCommands::List {
            status,
            category,
            search,
            sort,
            limit,
        } => {
            list::handle(
                status.as_deref(),
                category.as_deref(),
                search.as_deref(),
                *sort,
                *limit,
                ctx,
                flags,
            )
            .await
        }
        IssueCommands::Get { issue_id } => get::handle(issue_id, ctx, flags).await,
        IssueCommands::Status { issue_id, status } => {
            status::handle(issue_id, status, ctx, flags).await
        }
        IssueCommands::Respond { issue_id, message } => {
            respond::handle(issue_id, message, ctx, flags).await
        }
        IssueCommands::Stats => stats::handle(ctx, flags).await,
        IssueCommands::Watch { interval, cycles } => {
            watch::handle(*interval, *cycles, ctx, flags).await
        }
    }
}
