use cfp_core::responses::AuthStatus;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Report session state without touching the network. Resolving the token
/// also clears it if it has already expired, so `authenticated: false` here
/// means the next request would go out unauthenticated too.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let token = cfp_auth::resolve_token();
    let status = AuthStatus {
        authenticated: token.is_some(),
        token_source: token
            .as_ref()
            .and_then(|_| cfp_auth::token_store::detect_token_source()),
        token_expires_at: token
            .as_ref()
            .and_then(|t| t.expires_at)
            .map(|exp| exp.to_rfc3339()),
        device_id: ctx.client.device_id().to_string(),
    };
    output(&status, flags.format)
}
