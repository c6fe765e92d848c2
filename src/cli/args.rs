//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `defaults`: Resolve a variable product's default attributes per language
//! - `pending`: Classify a product as simple, pending-variable or variable
//! - `translations`: List the translations of a product or term
//! - `init`: Initialize polycat configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Defaults(cmd)) => cmd.common.verbose,
            Some(Command::Pending(cmd)) => cmd.common.verbose,
            Some(Command::Translations(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all catalog commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Catalog snapshot file (overrides config file)
    #[arg(long, env = "POLYCAT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Output format (overrides config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct DefaultsCommand {
    /// Variable product id
    pub product: u64,

    /// Only resolve this language (default: all configured languages)
    #[arg(long)]
    pub lang: Option<String>,

    /// Leave the default language out of the result
    #[arg(long)]
    pub exclude_default: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PendingCommand {
    /// Product id
    pub product: u64,

    /// Post type of the current admin screen
    #[arg(long, requires = "screen_action")]
    pub screen_post_type: Option<String>,

    /// Action of the current admin screen (e.g., "add")
    #[arg(long, requires = "screen_post_type")]
    pub screen_action: Option<String>,

    /// Source post of the translation being created
    #[arg(long)]
    pub from_post: Option<u64>,

    /// Language of the translation being created
    #[arg(long)]
    pub new_lang: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TranslationKind {
    Product,
    Term,
}

#[derive(Debug, Args)]
pub struct TranslationsCommand {
    #[arg(value_enum)]
    pub kind: TranslationKind,

    /// Product or term id
    pub id: u64,

    /// Leave the default language out of the listing
    #[arg(long)]
    pub exclude_default: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a variable product's default attributes in every language
    Defaults(DefaultsCommand),
    /// Check whether a simple product is a variable product awaiting promotion
    Pending(PendingCommand),
    /// List the translations of a product or term
    Translations(TranslationsCommand),
    /// Initialize a new .polycatrc.json configuration file
    Init,
}
