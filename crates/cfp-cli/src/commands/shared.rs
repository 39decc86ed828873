use cfp_auth::{AuthError, SessionToken};
use cfp_core::entities::User;

use crate::context::AppContext;

/// Gate an admin-only command behind a live session and the admin role.
///
/// Mirrors the dashboard's protected routes: no stored token means "log in
/// first", a non-admin profile means access denied rather than a silent
/// empty result.
pub async fn require_admin(ctx: &AppContext) -> anyhow::Result<User> {
    ensure_session(cfp_auth::resolve_token().as_ref())?;
    let user = ctx.client.profile().await?;
    ensure_admin_role(&user)?;
    Ok(user)
}

fn ensure_session(token: Option<&SessionToken>) -> Result<(), AuthError> {
    if token.is_none() {
        return Err(AuthError::NotAuthenticated);
    }
    Ok(())
}

fn ensure_admin_role(user: &User) -> Result<(), AuthError> {
    if !user.is_admin() {
        return Err(AuthError::AccessDenied {
            required: "admin".into(),
        });
    }
    Ok(())
}

/// Compute effective limit with precedence: local arg -> global flag -> config.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use cfp_core::enums::Role;

    use super::*;

    fn user_with(role: Role) -> User {
        User {
            user_id: "u-1".into(),
            username: "sam".into(),
            email: "sam@campus.edu".into(),
            role,
        }
    }

    #[test]
    fn missing_token_is_not_authenticated() {
        assert!(matches!(
            ensure_session(None),
            Err(AuthError::NotAuthenticated)
        ));
    }

    #[test]
    fn present_token_passes_the_session_gate() {
        let token = SessionToken {
            raw: "tok".into(),
            expires_at: None,
        };
        assert!(ensure_session(Some(&token)).is_ok());
    }

    #[test]
    fn admin_role_is_allowed() {
        assert!(ensure_admin_role(&user_with(Role::Admin)).is_ok());
    }

    #[test]
    fn student_role_is_denied_with_the_required_role_named() {
        match ensure_admin_role(&user_with(Role::Student)) {
            Err(AuthError::AccessDenied { required }) => assert_eq!(required, "admin"),
            other => panic!("expected access denied, got {other:?}"),
        }
    }

    #[test]
    fn local_takes_precedence() {
        assert_eq!(effective_limit(Some(5), Some(10), 20), 5);
    }

    #[test]
    fn global_used_when_local_missing() {
        assert_eq!(effective_limit(None, Some(10), 20), 10);
    }

    #[test]
    fn config_fallback_used_when_none_set() {
        assert_eq!(effective_limit(None, None, 20), 20);
    }
}
