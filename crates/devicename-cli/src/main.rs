//! devicename - Android device market name lookup
//!
//! Resolves hardware codenames and model identifiers to consumer market names
//! and regenerates the data the resolvers ship with.

mod display;
mod json_output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use devicename_config::{Config, ConfigLoader, LoggingConfig};
use devicename_database::AssetInstaller;
use devicename_engine::DeviceNames;
use devicename_pipeline::{CsvSource, Pipeline};
use devicename_store::{DeviceCache, PreferenceStore};
use devicename_types::{CacheCapacity, CurrentDevice, DeviceQuery, ResolutionSource};
use json_output::{print_json, CacheJson, GenerateJson, ResolutionJson};
use std::path::PathBuf;
use tracing::info;

/// devicename - Android device market name lookup
#[derive(Parser)]
#[command(
    name = "devicename",
    version = env!("CARGO_PKG_VERSION"),
    about = "Android device market name lookup",
    long_about = "devicename maps Android codenames and model identifiers to consumer market names.\n\
                  It resolves through a compiled-in table, a bundled SQLite database and an\n\
                  optional network catalog, and regenerates that data from Google's device list."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Verbose mode - detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Manufacturer of the device being described
    #[arg(long, global = true, default_value = "")]
    device_manufacturer: String,

    /// Codename of the device being described
    #[arg(long, global = true, default_value = "")]
    device_codename: String,

    /// Model of the device being described
    #[arg(long, global = true, default_value = "")]
    device_model: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a codename in the compiled-in table only
    Name {
        /// Hardware codename
        codename: String,
        /// Printed when the codename is unknown
        #[arg(short, long, default_value = "Unknown")]
        fallback: String,
    },
    /// Resolve a market name through every enabled layer
    Resolve {
        /// Hardware codename
        #[arg(long)]
        codename: Option<String>,
        /// Model identifier
        #[arg(long)]
        model: Option<String>,
        /// Printed when no layer resolves the device
        #[arg(short, long, default_value = "Unknown")]
        fallback: String,
        /// Use the legacy network resolver even if disabled in configuration
        #[arg(long)]
        network: bool,
    },
    /// Show the full record for a device, defaulting to the described device
    Info {
        /// Hardware codename
        #[arg(long)]
        codename: Option<String>,
        /// Model identifier
        #[arg(long)]
        model: Option<String>,
        /// Use the legacy network resolver even if disabled in configuration
        #[arg(long)]
        network: bool,
    },
    /// Extract the bundled database
    Install {
        /// Extract even if an up-to-date copy exists
        #[arg(long)]
        force: bool,
    },
    /// Regenerate the JSON, database and table artifacts
    Generate {
        /// CSV location, URL or file (default: the published list)
        #[arg(long)]
        source: Option<String>,
        /// Directory for the JSON artifacts
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Directory for the database and its zip
        #[arg(long)]
        database_dir: Option<PathBuf>,
        /// Also write the static table source here
        #[arg(long)]
        table: Option<PathBuf>,
        /// Skip the database snapshot
        #[arg(long)]
        no_database: bool,
    },
    /// Inspect or clear the lookup cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
    /// Show or create configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Show cache statistics
    Stats,
    /// List cached entries
    List,
    /// Remove every cached entry
    Clear,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show {
        /// Print the built-in defaults instead
        #[arg(long)]
        default: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "yaml")]
        format: ConfigFormat,
    },
    /// Write a default configuration file
    Init {
        /// Target file (default: the user configuration path)
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;
    init_logging(cli.debug, cli.quiet, cli.verbose, &config.logging)?;

    info!("devicename v{} starting", env!("CARGO_PKG_VERSION"));

    let current = CurrentDevice::new(
        cli.device_manufacturer.clone(),
        cli.device_codename.clone(),
        cli.device_model.clone(),
    );

    match cli.command {
        Commands::Name { codename, fallback } => {
            name_command(&config, current, &codename, &fallback, cli.json)?;
        }
        Commands::Resolve {
            codename,
            model,
            fallback,
            network,
        } => {
            let query = DeviceQuery::new(codename.as_deref(), model.as_deref());
            resolve_command(with_network(config, network), current, &query, &fallback, cli.json)
                .await?;
        }
        Commands::Info {
            codename,
            model,
            network,
        } => {
            info_command(with_network(config, network), current, codename, model, cli.json)
                .await?;
        }
        Commands::Install { force } => {
            install_command(&config, force, cli.quiet)?;
        }
        Commands::Generate {
            source,
            output,
            database_dir,
            table,
            no_database,
        } => {
            let mut config = config;
            if let Some(output) = output {
                config.pipeline.output_dir = output;
            }
            if let Some(database_dir) = database_dir {
                config.pipeline.database_dir = database_dir;
            }
            generate_command(config, source, table, no_database, cli.quiet, cli.json).await?;
        }
        Commands::Cache { action } => {
            cache_command(&config, action, cli.json)?;
        }
        Commands::Config { action } => {
            config_command(&config, action)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ConfigLoader::load_default().context("Failed to load configuration")?,
    };
    Ok(config)
}

fn init_logging(debug: bool, quiet: bool, verbose: bool, logging: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else if quiet {
        "error"
    } else {
        logging.level.as_str()
    };

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    if logging.json_format {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

fn with_network(mut config: Config, network: bool) -> Config {
    if network {
        config.network.enabled = true;
    }
    config
}

fn name_command(
    config: &Config,
    current: CurrentDevice,
    codename: &str,
    fallback: &str,
    json: bool,
) -> Result<()> {
    let mut config = config.clone();
    config.database.enabled = false;
    config.network.enabled = false;
    let names = DeviceNames::with_config(config, current)?;
    let name = names.device_name(codename, fallback);

    if json {
        let query = DeviceQuery::codename_only(codename);
        let mut output = ResolutionJson::new("name", &query, names.resolution(&query)?);
        output.name = name;
        print_json(&output)?;
    } else {
        println!("{}", name);
    }
    Ok(())
}

async fn resolve_command(
    config: Config,
    current: CurrentDevice,
    query: &DeviceQuery,
    fallback: &str,
    json: bool,
) -> Result<()> {
    let names = DeviceNames::with_config(config, current)?;

    let owned = query.clone();
    let resolution = tokio::task::spawn_blocking(move || names.resolution(&owned))
        .await
        .context("Lookup task failed")??;

    let name = match resolution.source {
        ResolutionSource::Fallback => fallback.to_string(),
        _ => resolution.info.name(),
    };

    if json {
        let mut output = ResolutionJson::new("resolve", query, resolution);
        output.name = name;
        print_json(&output)?;
    } else {
        println!("{}", name);
    }
    Ok(())
}

async fn info_command(
    config: Config,
    current: CurrentDevice,
    codename: Option<String>,
    model: Option<String>,
    json: bool,
) -> Result<()> {
    let names = DeviceNames::with_config(config, current)?;
    let mut request = names.request();
    if let Some(codename) = codename {
        request = request.codename(codename);
    }
    if let Some(model) = model {
        request = request.model(model);
    }
    let query = request.query();

    let (resolution, error) = tokio::task::spawn_blocking(move || request.run_detailed())
        .await
        .context("Lookup task failed")?;
    let error = error.map(|e| e.to_string());

    if json {
        print_json(&ResolutionJson::new("info", &query, resolution).with_error(error))?;
    } else {
        display::display_resolution(&resolution, error.as_deref());
    }
    Ok(())
}

fn install_command(config: &Config, force: bool, quiet: bool) -> Result<()> {
    let installer = AssetInstaller::from_config(&config.database)?;
    let spinner = display::create_spinner(quiet, "Installing device database...");

    let extracted = if force {
        installer.reinstall()?;
        true
    } else {
        installer.install_if_needed()?
    };
    let path = installer.database_path();

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if !quiet {
        let verb = if extracted {
            "Installed"
        } else {
            "Already installed"
        };
        println!(
            "{} {} {}",
            style("✓").green().bold(),
            verb,
            style(path.display()).cyan()
        );
    }
    Ok(())
}

async fn generate_command(
    config: Config,
    source: Option<String>,
    table: Option<PathBuf>,
    no_database: bool,
    quiet: bool,
    json: bool,
) -> Result<()> {
    let mut pipeline =
        Pipeline::new(config.pipeline.clone()).with_timeouts(config.network.timeouts.clone());
    if let Some(table) = table {
        pipeline = pipeline.with_table_output(table);
    }
    if no_database {
        pipeline = pipeline.without_database();
    }
    let source = source.map_or_else(|| pipeline.default_source(), |s| CsvSource::parse(&s));

    if !quiet && !json {
        println!(
            "{} Generating device data from {}",
            style("→").green().bold(),
            style(&source).cyan()
        );
    }
    let spinner = display::create_spinner(quiet || json, "Processing device list...");

    let report = tokio::task::spawn_blocking(move || pipeline.run(&source))
        .await
        .context("Generation task failed")??;

    if let Some(pb) = spinner {
        pb.finish_with_message("Generation completed");
    }

    if json {
        print_json(&GenerateJson::from(&report))?;
    } else if !quiet {
        display::display_pipeline_report(&report);
    }
    Ok(())
}

fn cache_command(config: &Config, action: CacheAction, json: bool) -> Result<()> {
    let path = config.cache.path();
    let store = PreferenceStore::shared(&path)?;
    let cache = DeviceCache::with_capacity(store, config.cache.max_entries)?;
    let capacity = config.cache.max_entries.map(CacheCapacity::get);

    match action {
        CacheAction::Stats => {
            let stats = cache.stats();
            if json {
                print_json(&CacheJson::new(&path, &stats, capacity))?;
            } else {
                display::display_cache_stats(&path, &stats, capacity);
            }
        }
        CacheAction::List => {
            let entries = cache.entries()?;
            if json {
                let map: std::collections::BTreeMap<_, _> = entries.into_iter().collect();
                print_json(&map)?;
            } else {
                display::display_cache_entries(&entries);
            }
        }
        CacheAction::Clear => {
            let removed = cache.len();
            cache.clear()?;
            println!(
                "{} Removed {} cached entries",
                style("✓").green().bold(),
                removed
            );
        }
    }
    Ok(())
}

fn config_command(config: &Config, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show { default, format } => {
            let shown = if default {
                Config::default()
            } else {
                config.clone()
            };
            println!("{}", render_config(&shown, format)?);
        }
        ConfigAction::Init { path, force } => {
            let path = path.unwrap_or_else(ConfigLoader::user_config_path);
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists, pass --force to overwrite",
                    path.display()
                );
            }
            ConfigLoader::generate_default_config(&path)?;
            println!(
                "{} Wrote default configuration to {}",
                style("⚙").blue().bold(),
                style(path.display()).cyan()
            );
        }
    }
    Ok(())
}

fn render_config(config: &Config, format: ConfigFormat) -> Result<String> {
    Ok(match format {
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case(&["devicename", "name", "clark"])]
    #[case(&["devicename", "resolve", "--codename", "zerolte", "--model", "SM-G925I"])]
    #[case(&["devicename", "info", "--network", "--json"])]
    #[case(&["devicename", "generate", "--source", "devices.csv", "--table", "table.rs"])]
    #[case(&["devicename", "cache", "stats"])]
    #[case(&["devicename", "config", "show", "--format", "toml"])]
    fn test_parse_commands(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_ok());
    }

    #[test]
    fn test_resolve_defaults() {
        let cli = Cli::try_parse_from(["devicename", "resolve", "--codename", "clark"]).unwrap();
        match cli.command {
            Commands::Resolve {
                codename,
                model,
                fallback,
                network,
            } => {
                assert_eq!(codename.as_deref(), Some("clark"));
                assert_eq!(model, None);
                assert_eq!(fallback, "Unknown");
                assert!(!network);
            }
            _ => panic!("expected resolve"),
        }
    }

    #[rstest]
    #[case(ConfigFormat::Yaml, "schema_version: 1")]
    #[case(ConfigFormat::Toml, "schema_version = 1")]
    #[case(ConfigFormat::Json, "\"schema_version\": 1")]
    fn test_render_config(#[case] format: ConfigFormat, #[case] expected: &str) {
        let rendered = render_config(&Config::default(), format).unwrap();
        assert!(rendered.contains(expected), "{}", rendered);
    }

    #[test]
    fn test_with_network() {
        assert!(with_network(Config::default(), true).network.enabled);
        assert!(!with_network(Config::default(), false).network.enabled);
    }
}
