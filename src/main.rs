use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use repolist_core::github::parse_repositories;
use repolist_core::lister::render_repositories;
use repolist_core::{
    Config, ErrorPolicy, FileTarget, GitHubClient, Lister, ListerConfig, MemoryTarget, SortOrder,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "repolist",
    about = "Render a GitHub user's repositories as an HTML list",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, env = "REPOLIST_CONFIG")]
    config: Option<PathBuf>,
}

/// Options shared by commands that render a list
#[derive(clap::Args)]
struct RenderArgs {
    /// Render at most COUNT + 1 leading repositories
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Account used in github.com links (defaults to USERNAME)
    #[arg(long)]
    org: Option<String>,

    /// Ordering before selection (name, api)
    #[arg(long)]
    sort: Option<SortOrder>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a user's repositories and render them
    List {
        /// GitHub username
        username: String,

        #[command(flatten)]
        render: RenderArgs,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Give up on the request after this many seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Replace the loading indicator with an error message on failure
        #[arg(long)]
        show_errors: bool,
    },

    /// Render a saved API response without touching the network
    Render {
        /// GitHub username the response belongs to
        username: String,

        /// JSON file holding the API response
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for markup
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Commands::List {
            username,
            render,
            output,
            timeout,
            show_errors,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let mut lister_config = lister_config(&config, &render);
            if let Some(secs) = timeout {
                lister_config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
            }
            if show_errors {
                lister_config.error_policy = ErrorPolicy::ShowError;
            }

            let client = GitHubClient::from_config(&config.github)?;
            let lister = Lister::new(client, lister_config);

            let outcome = match &output {
                Some(path) => {
                    let target = FileTarget::new(path);
                    lister.list(&target, &username, render.count).await
                }
                None => {
                    let target = MemoryTarget::new();
                    let outcome = lister.list(&target, &username, render.count).await;
                    let html = target.contents();
                    if !html.is_empty() {
                        println!("{}", html);
                    }
                    outcome
                }
            };

            match outcome {
                Ok(state) => {
                    debug!("Target state: {:?}", state);
                    if let Some(path) = output {
                        info!("Wrote {}", path.display());
                    }
                }
                Err(e) => {
                    warn!(
                        "Target left in {:?} state",
                        lister.config().error_policy.failure_state()
                    );
                    return Err(e)
                        .with_context(|| format!("Failed to list repositories for {}", username));
                }
            }
        }
        Commands::Render {
            username,
            input,
            render,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let lister_config = lister_config(&config, &render);

            let body = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let repos = parse_repositories(&body)
                .with_context(|| format!("Failed to parse {}", input.display()))?;

            let html = render_repositories(
                &lister_config,
                repos,
                &username,
                render.count,
                chrono::Utc::now(),
            )?;
            println!("{}", html);
        }
        Commands::Config { command } => {
            let path = match cli.config {
                Some(path) => path,
                None => Config::default_path()?,
            };

            match command {
                ConfigCommands::Init { force } => {
                    if path.exists() && !force {
                        bail!(
                            "Config file already exists at {} (use --force to overwrite)",
                            path.display()
                        );
                    }
                    Config::default().save(&path)?;
                    println!("Wrote {}", path.display());
                }
                ConfigCommands::Show => {
                    let config = load_config(Some(&path))?;
                    print!("{}", config.to_toml()?);
                }
                ConfigCommands::Path => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(path).context("Failed to load configuration")?;
    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// File configuration with command-line overrides applied
fn lister_config(config: &Config, args: &RenderArgs) -> ListerConfig {
    let mut lister_config = ListerConfig::from_config(config);
    if let Some(org) = &args.org {
        lister_config.link_owner = Some(org.clone());
    }
    if let Some(sort) = args.sort {
        lister_config.sort = sort;
    }
    lister_config
}
