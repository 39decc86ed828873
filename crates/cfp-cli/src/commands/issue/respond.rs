use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct RespondResponse {
    issue_id: String,
    posted: bool,
}

pub async fn handle(
    issue_id: &str,
    message: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let message = message.trim();
    if message.is_empty() {
        anyhow::bail!("response message cannot be empty");
    }

    shared::require_admin(ctx).await?;
    ctx.client.post_response(issue_id, message).await?;

    output(
        &RespondResponse {
            issue_id: issue_id.to_string(),
            posted: true,
        },
        flags.format,
    )
}
