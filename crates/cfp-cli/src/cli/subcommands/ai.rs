use clap::Subcommand;

/// AI-assistance commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AiCommands {
    /// Draft a response for an issue description.
    Draft {
        #[arg(long)]
        description: String,
    },
    /// Fetch the admin insights panel payload.
    Insights,
}
