use std::str::FromStr;

use cfp_core::enums::IssueStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct StatusUpdateResponse {
    issue_id: String,
    status: IssueStatus,
    updated: bool,
}

pub async fn handle(
    issue_id: &str,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    shared::require_admin(ctx).await?;
    let status = IssueStatus::from_str(status)?;
    ctx.client.update_status(issue_id, status).await?;

    output(
        &StatusUpdateResponse {
            issue_id: issue_id.to_string(),
            status,
            updated: true,
        },
        flags.format,
    )
}
