use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated — run `cfp auth login`")]
    NotAuthenticated,

    #[error("session expired — run `cfp auth login` again")]
    TokenExpired,

    #[error("access denied — this command requires the {required} role")]
    AccessDenied { required: String },

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("device id error: {0}")]
    DeviceIdError(String),

    #[error("{0}")]
    Other(String),
}
