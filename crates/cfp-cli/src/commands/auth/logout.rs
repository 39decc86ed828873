use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    logged_out: bool,
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    cfp_auth::logout()?;
    output(&LogoutResponse { logged_out: true }, flags.format)
}
