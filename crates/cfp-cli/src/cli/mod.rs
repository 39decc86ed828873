use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `cfp` binary.
#[derive(Debug, Parser)]
#[command(name = "cfp", version, about = "Campus feedback portal client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{AuthCommands, IssueCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "cfp", "--format", "table", "--limit", "10", "--verbose", "issue", "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Issue {
                action: IssueCommands::List { .. }
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["cfp", "auth", "status", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Status
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["cfp", "--format", "xml", "auth", "status"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn submit_parses_named_identity_flags() {
        let cli = Cli::try_parse_from([
            "cfp",
            "issue",
            "submit",
            "--title",
            "Wi-Fi down",
            "--description",
            "Block B has no signal",
            "--category",
            "facilities",
            "--name",
            "Jane",
            "--email",
            "jane@students.ac.ke",
            "--phone",
            "0712345678",
            "--admission",
            "ADM-1",
        ])
        .expect("cli should parse");

        let Commands::Issue {
            action: IssueCommands::Submit(args),
        } = cli.command
        else {
            panic!("expected issue submit");
        };
        assert_eq!(args.title, "Wi-Fi down");
        assert_eq!(args.name.as_deref(), Some("Jane"));
        assert!(!args.offline);
    }

    #[test]
    fn track_requires_a_ticket_id() {
        assert!(Cli::try_parse_from(["cfp", "issue", "track"]).is_err());
        let cli =
            Cli::try_parse_from(["cfp", "issue", "track", "abc12345"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Issue {
                action: IssueCommands::Track { .. }
            }
        ));
    }
}
