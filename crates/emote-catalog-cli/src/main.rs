use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use emote_catalog_core::config::Config;
use emote_catalog_core::{
    Aggregator, EmoteCatalogError, Emote, FileBadgeSource, Platform, Result, Session,
    SwitchRequest,
};

mod args;
use args::{Cli, Commands, ConfigAction, Shell, ShowMode};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let base_dir = resolve_base_dir(cli.base_dir);

    let config = match Config::load(&base_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            return ExitCode::from(e.exit_code() as u8);
        }
    };
    init_logging(cli.verbose, cli.quiet, &config);

    let result = match cli.command {
        Some(Commands::Switch {
            channels,
            as_channel,
            name,
            platform,
            show,
            json,
        }) => handle_switch(
            &base_dir,
            &config,
            &channels,
            as_channel.as_deref(),
            name.as_deref(),
            platform.map(Platform::from),
            show,
            json,
        ),
        Some(Commands::Badges { identities }) => handle_badges(&base_dir, &config, &identities),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool, config: &Config) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        config.log.level.as_str()
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "emote-catalog", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("EMOTE_CATALOG_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".emote-catalog"))
        .unwrap_or_else(|| PathBuf::from(".emote-catalog"))
}

/// Single-threaded runtime: source calls are multiplexed on one thread
fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread().build()?)
}

fn handle_switch(
    base_dir: &Path,
    config: &Config,
    channels: &[String],
    as_channel: Option<&str>,
    name: Option<&str>,
    platform: Option<Platform>,
    show: ShowMode,
    json: bool,
) -> Result<()> {
    let data_dir = config.data_dir(base_dir);
    let session = Session::new(Aggregator::from_data_dir(&data_dir));
    let platform = platform.unwrap_or(config.sources.platform);

    let merged = runtime()?.block_on(async {
        let mut merged = Vec::new();
        for (i, channel) in channels.iter().enumerate() {
            let mut request = SwitchRequest::new(channel.as_str()).with_platform(platform);
            if let Some(alias) = as_channel {
                request = request.with_alias(alias);
            }
            let label = match name.filter(|_| i + 1 == channels.len()) {
                Some(name) => {
                    request = request.with_channel_name(name);
                    format!("{} ({})", channel, name)
                }
                None => channel.clone(),
            };

            merged = session.switch_channel(request).await?;
            println!(
                "{} {} ({} emotes)",
                "Switched:".green(),
                label.bold(),
                merged.len()
            );
        }
        Ok::<_, EmoteCatalogError>(merged)
    })?;

    let emotes: Vec<Emote> = match show {
        ShowMode::Merged => merged,
        ShowMode::All => session.all_emotes(),
        ShowMode::Index => {
            let index = session.emote_index();
            let mut emotes: Vec<Emote> = index.values().cloned().collect();
            emotes.sort_by(|a, b| a.name.cmp(&b.name));
            emotes
        }
    };

    let store = session.store();

    if json {
        let sets: Vec<_> = store.sets().collect();
        let output = serde_json::json!({ "sets": sets, "emotes": emotes });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!("{}", "Sets:".cyan().bold());
    for set in store.sets() {
        let state = if set.enabled {
            "enabled".green()
        } else {
            "disabled".dimmed()
        };
        println!("  {:<24} {:>5} emotes  {}", set.name, set.len(), state);
    }

    println!();
    println!("{}", "Emotes:".cyan().bold());
    for emote in &emotes {
        println!(
            "  {:<24} {:<5} weight={:<4} {}",
            emote.name,
            emote.provider.to_string(),
            emote.weight,
            emote.id.dimmed()
        );
    }
    println!();

    Ok(())
}

fn handle_badges(base_dir: &Path, config: &Config, identities: &[String]) -> Result<()> {
    let data_dir = config.data_dir(base_dir);
    let session = Session::new(Aggregator::from_data_dir(&data_dir));
    let source = FileBadgeSource::new(&data_dir);

    runtime()?.block_on(session.load_badges(&source))?;

    println!();
    for identity in identities {
        let badges = session.badges_for(identity);
        if badges.is_empty() {
            println!("{} {}", identity.bold(), "(no badges)".dimmed());
            continue;
        }

        println!("{}", identity.bold());
        for badge in badges {
            println!("  {} {}", badge.name.cyan(), badge.tooltip.dimmed());
        }
    }
    println!();

    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(EmoteCatalogError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}
