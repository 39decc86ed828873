use crate::cli::GlobalFlags;
use crate::commands::shared;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(issue_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    shared::require_admin(ctx).await?;
    let issue = ctx.client.issue_details(issue_id).await?;
    output(&issue, flags.format)
}
