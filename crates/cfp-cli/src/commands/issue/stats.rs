use cfp_core::responses::IssueStats;

use crate::cli::GlobalFlags;
use crate::commands::shared;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    shared::require_admin(ctx).await?;
    let issues = ctx.client.all_issues().await?;
    output(&IssueStats::compute(&issues), flags.format)
}
