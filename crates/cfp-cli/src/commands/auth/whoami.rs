use cfp_auth::AuthError;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if cfp_auth::resolve_token().is_none() {
        return Err(AuthError::NotAuthenticated.into());
    }
    let user = ctx.client.profile().await?;
    output(&user, flags.format)
}
