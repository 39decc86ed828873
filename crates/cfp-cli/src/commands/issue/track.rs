use cfp_store::local::LocalIssueStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Ticket IDs are stored uppercase; input is normalized before lookup.
pub async fn handle(
    ticket_id: &str,
    offline: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let normalized = ticket_id.trim().to_uppercase();
    if normalized.is_empty() {
        anyhow::bail!("please enter a ticket ID");
    }

    let issue = if offline {
        LocalIssueStore::open_default()?.get_by_ticket_id(&normalized)?
    } else {
        ctx.client.track_issue(&normalized).await?
    };

    output(&issue, flags.format)
}
