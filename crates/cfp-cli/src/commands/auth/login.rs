use cfp_core::entities::User;
use cfp_core::enums::Role;
use cfp_core::responses::LoginOutcome;
use cfp_core::validate::validate_login;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    email: &str,
    password: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    validate_login(email, password)?;

    let token = ctx.client.login(email, password).await?;
    cfp_auth::token_store::store(&token)?;
    tracing::debug!("session token stored");

    // The profile fetch rides on the token we just stored.
    let user = ctx.client.profile().await?;
    let landing = landing_path(&user).to_string();

    output(
        &LoginOutcome {
            authenticated: true,
            user,
            landing,
        },
        flags.format,
    )
}

/// The dashboard path each role lands on after login.
fn landing_path(user: &User) -> &'static str {
    match user.role {
        Role::Admin => "/admin/dashboard",
        Role::Student => "/student/dashboard",
        Role::Unknown => "/unauthorized",
    }
}
