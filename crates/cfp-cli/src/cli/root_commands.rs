use clap::{Args, Subcommand};

use crate::cli::subcommands::{AiCommands, AuthCommands, IssueCommands, TicketsCommands};

/// All top-level `cfp` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Login, logout, and session inspection.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Submit, track, list, and respond to issues.
    Issue {
        #[command(subcommand)]
        action: IssueCommands,
    },
    /// AI drafting and the admin insights panel.
    Ai {
        #[command(subcommand)]
        action: AiCommands,
    },
    /// The local recent-ticket ledger.
    Tickets {
        #[command(subcommand)]
        action: TicketsCommands,
    },
    /// Generate sitemap.xml for the portal's public routes.
    Sitemap(SitemapArgs),
    /// Print JSON Schema for the wire entities.
    Schema(SchemaArgs),
}

#[derive(Debug, Args)]
pub struct SitemapArgs {
    /// Override the configured public base URL.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Write to a file instead of stdout.
    #[arg(long)]
    pub out: Option<String>,
}

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Entity to print (issue, response, user). Omit for all.
    pub entity: Option<String>,
}
