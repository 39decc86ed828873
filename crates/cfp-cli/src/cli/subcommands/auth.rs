use clap::Subcommand;

/// Auth lifecycle commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with portal credentials.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Clear stored credentials.
    Logout,
    /// Show session state: token source, expiry, device id.
    Status,
    /// Fetch the authenticated profile.
    Whoami,
}
