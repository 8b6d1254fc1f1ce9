//! stack-prune CLI

mod cli;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use cli::style::Stylize;
use stack_prune::config::DeleteVia;
use stack_prune::types::Platform;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Delete the branches of stacked PR chains once every PR is closed
#[derive(Debug, Parser)]
#[command(name = "stack-prune", version, about, long_about = None)]
struct Cli {
    /// Path inside the git repository
    #[arg(long, global = true, default_value = ".")]
    path: PathBuf,

    /// Git remote to use (default: settings, then origin, then the first remote)
    #[arg(long, global = true)]
    remote: Option<String>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Delete the branches of chains whose PRs are all closed, tip first
    Prune {
        /// Show what would be deleted without deleting anything
        #[arg(long)]
        dry_run: bool,

        /// Do not ask for confirmation before each chain
        #[arg(short, long)]
        yes: bool,

        /// Only process this chain (repeatable)
        #[arg(long = "chain", value_name = "NAME")]
        chains: Vec<String>,

        /// How to delete branches
        #[arg(long, value_enum)]
        via: Option<ViaArg>,
    },
    /// List chains found among closed PRs and whether they can be pruned
    List {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Check that credentials for a platform can be found and used
    Auth {
        #[command(subcommand)]
        platform: AuthPlatform,
    },
}

#[derive(Debug, Subcommand)]
enum AuthPlatform {
    /// Check github authentication (GH_TOKEN, GITHUB_TOKEN or gh)
    Github {
        /// GitHub Enterprise host
        #[arg(long)]
        host: Option<String>,
    },
    /// Check gitlab authentication (GITLAB_TOKEN, GL_TOKEN or glab)
    Gitlab {
        /// Self-hosted GitLab host
        #[arg(long)]
        host: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViaArg {
    /// git push --delete
    Git,
    /// Platform REST API
    Api,
}

impl From<ViaArg> for DeleteVia {
    fn from(via: ViaArg) -> Self {
        match via {
            ViaArg::Git => Self::Git,
            ViaArg::Api => Self::Api,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "stack_prune=info",
        _ => "stack_prune=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Auth { platform } => match platform {
            AuthPlatform::Github { host } => cli::run_auth(Platform::GitHub, host.as_deref()).await?,
            AuthPlatform::Gitlab { host } => cli::run_auth(Platform::GitLab, host.as_deref()).await?,
        },
        Commands::Prune {
            dry_run,
            yes,
            chains,
            via,
        } => {
            let path = canonical(&cli.path)?;
            let options = cli::PruneOptions {
                dry_run,
                yes,
                chains,
                via: via.map(Into::into),
            };
            cli::run_prune(&path, cli.remote.as_deref(), options).await?;
        }
        Commands::List { json } => {
            let path = canonical(&cli.path)?;
            cli::run_list(&path, cli.remote.as_deref(), json).await?;
        }
    }
    Ok(())
}

fn canonical(path: &std::path::Path) -> anyhow::Result<PathBuf> {
    path.canonicalize()
        .with_context(|| format!("cannot access {}", path.display()))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            anstream::eprintln!("{} {e:#}", "error:".failure());
            ExitCode::FAILURE
        }
    }
}
