use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use emote_catalog_core::Platform;

#[derive(Parser)]
#[command(name = "emote-catalog")]
#[command(about = "Aggregate emotes and badges from several providers into one catalog")]
#[command(version)]
pub struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.emote-catalog)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    Twitch,
    Youtube,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Twitch => Platform::Twitch,
            PlatformArg::Youtube => Platform::YouTube,
        }
    }
}

/// What to print after the last switch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ShowMode {
    /// Emotes returned by the last switch
    #[default]
    Merged,
    /// Name-keyed index over all enabled sets
    Index,
    /// Every enabled emote, weight-sorted per set
    All,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Switch channels in order and print the resulting catalog
    Switch {
        /// Channel ids, switched to one after another
        #[arg(required = true)]
        channels: Vec<String>,

        /// Also disable this channel's set (watching "as" another identity)
        #[arg(long = "as")]
        as_channel: Option<String>,

        /// Display name of the last channel, shown in logs and output
        #[arg(long)]
        name: Option<String>,

        /// Platform for channel-scoped providers (default: sources.platform)
        #[arg(short, long, value_enum)]
        platform: Option<PlatformArg>,

        /// What to print
        #[arg(short, long, value_enum, default_value_t = ShowMode::Merged)]
        show: ShowMode,

        /// Print sets and emotes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up badges worn by user ids or handles
    Badges {
        /// Numeric user ids or handles
        #[arg(required = true)]
        identities: Vec<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., sources.platform)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., sources.platform)
        key: String,

        /// Value to set (e.g., "youtube")
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}
