mod shell;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use shell::{split_line, ShellCommand, ShellLine};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Compact,
}

#[derive(Parser)]
#[command(name = "userdesk")]
#[command(about = "Browse and edit a user directory in a local session", version)]
#[command(after_help = "EXAMPLES:
    userdesk                          Start an interactive session
    userdesk session --offline        Start with an empty collection
    userdesk list --search weaver     Print matching directory users
    userdesk init                     Write a config file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (table, json, compact)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show detailed error information and debug logs
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session (default)
    #[command(
        alias = "s",
        after_help = "EXAMPLES:
    userdesk session
    userdesk session --offline"
    )]
    Session(SessionArgs),
    /// Fetch the directory once and print it
    #[command(
        alias = "ls",
        after_help = "EXAMPLES:
    userdesk list
    userdesk list --search reqres.in
    userdesk list --format json"
    )]
    List(ListArgs),
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    userdesk completions bash > ~/.bash_completion.d/userdesk
    userdesk completions zsh > ~/.zfunc/_userdesk
    userdesk completions fish > ~/.config/fish/completions/userdesk.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    userdesk init")]
    Init,
}

#[derive(Args, Clone, Default)]
pub struct SessionArgs {
    /// Start with an empty collection instead of fetching the directory
    #[arg(long)]
    pub offline: bool,
}

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Only show users whose name or email contains this text
    #[arg(long, short)]
    pub search: Option<String>,
}
