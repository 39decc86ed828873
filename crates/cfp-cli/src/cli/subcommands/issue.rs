use clap::{Args, Subcommand};

/// Issue commands.
#[derive(Clone, Debug, Subcommand)]
pub enum IssueCommands {
    /// Submit a new issue or suggestion.
    Submit(SubmitArgs),
    /// Track a submission by its ticket ID.
    Track {
        ticket_id: String,
        /// Query the local offline store instead of the API.
        #[arg(long)]
        offline: bool,
    },
    /// List all issues (admin).
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Substring match over title, description, and ticket ID.
        #[arg(long)]
        search: Option<String>,
        /// Sort order: newest or oldest first.
        #[arg(long, default_value = "newest")]
        sort: SortOrder,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an issue with its responses (admin).
    Get { issue_id: String },
    /// Update an issue's status (admin).
    Status {
        issue_id: String,
        status: String,
    },
    /// Post a response to an issue (admin).
    Respond {
        issue_id: String,
        #[arg(long)]
        message: String,
    },
    /// Status and category counts across all issues (admin).
    Stats,
    /// Poll the listing and report changes (admin).
    Watch {
        /// Seconds between polls (defaults to config).
        #[arg(long)]
        interval: Option<u64>,
        /// Stop after this many polls (mainly for scripting).
        #[arg(long)]
        cycles: Option<u32>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum SortOrder {
    Newest,
    Oldest,
}

#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub category: String,
    /// Submitter name (providing any identity flag makes this a named submission).
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// Admission number.
    #[arg(long)]
    pub admission: Option<String>,
    /// Write to the local offline store instead of the API.
    #[arg(long)]
    pub offline: bool,
}
