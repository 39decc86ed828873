use clap::Subcommand;

/// Local recent-ticket ledger commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TicketsCommands {
    /// Show recently submitted tickets.
    List,
    /// Clear the local ledger.
    Clear,
}
