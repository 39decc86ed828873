use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AiCommands;
use crate::commands::shared;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DraftResponse {
    response: String,
}

/// Handle `cfp ai <subcommand>`. Both sit behind the admin panel's gate.
pub async fn handle(
    action: &AiCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    shared::require_admin(ctx).await?;

    match action {
        AiCommands::Draft { description } => {
            let description = description.trim();
            if description.is_empty() {
                anyhow::bail!("provide an issue description to draft a response for");
            }
            let response = ctx.client.generate_ai_response(description).await?;
            output(
                &DraftResponse {
                    response,
                },
                flags.format,
            )
        }
        AiCommands::Insights => {
            let insights = ctx.client.ai_insights().await?;
            output(&insights, flags.format)
        }
    }
}
