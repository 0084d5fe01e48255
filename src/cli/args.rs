//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::RoutingMode;

/// Namespace router for documentation site URLs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: nsroute.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "nsroute.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the routing mode from the config file
    #[arg(short, long, global = true)]
    pub mode: Option<RoutingMode>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the mount sequence: show defaults and redirect a bare root URL
    #[command(visible_alias = "m")]
    Mount {
        #[command(flatten)]
        location: LocationArgs,
    },

    /// Switch one namespace slot of a URL (omit VALUE to remove it)
    #[command(visible_alias = "o")]
    Open {
        #[command(flatten)]
        location: LocationArgs,

        /// Slot index (0 = first configured namespace)
        slot: usize,

        /// New token for the slot
        value: Option<String>,
    },

    /// Show the namespaces active for a URL
    #[command(visible_alias = "x")]
    Extract {
        #[command(flatten)]
        location: LocationArgs,

        /// Output JSON
        #[arg(short, long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(short, long, requires = "json")]
        pretty: bool,
    },

    /// Prefix sidebar links with the namespace active for a URL
    #[command(visible_alias = "r")]
    Rewrite {
        #[command(flatten)]
        location: LocationArgs,

        /// Sidebar HTML file. Reads stdin when omitted or `-`.
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: Option<PathBuf>,
    },
}

/// Current location of the page.
#[derive(clap::Args, Debug, Clone)]
pub struct LocationArgs {
    /// Full URL (https://docs.dev/#/en/guide) or route (/en/guide, #/en/guide)
    #[arg(value_hint = clap::ValueHint::Url)]
    pub url: String,
}

impl Commands {
    /// Location argument shared by every command.
    pub fn location(&self) -> &LocationArgs {
        match self {
            Self::Mount { location }
            | Self::Open { location, .. }
            | Self::Extract { location, .. }
            | Self::Rewrite { location, .. } => location,
        }
    }
}
