//! hsq-admin - HSQ admin panel server and configuration tool

mod cli;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hsq_core::{default_config_path, CoreError, PanelConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "hsq_admin=info,hsq_core=info,hsq_web=info";
const DEFAULT_DIST: &str = "crates/hsq-web/dist";

#[derive(Parser)]
#[command(
    name = "hsq-admin",
    version,
    about = "HSQ admin panel with role-aware navigation",
    long_about = "Serves the HSQ admin panel and inspects its navigation configuration.\n\
                  \n\
                  Examples:\n\
                    hsq-admin serve                       # API (+ frontend if built) on :3333\n\
                    hsq-admin serve --port 8080           # Custom port\n\
                    hsq-admin menu --role manager         # Entries a manager sees\n\
                    hsq-admin menu --role admin --path /rooms/12 --json\n\
                    hsq-admin check                       # Validate the configuration\n\
                    hsq-admin init                        # Write the default configuration\n\
                  \n\
                  Environment Variables:\n\
                    HSQ_ADMIN_CONFIG                      # Configuration file path\n\
                    HSQ_ADMIN_NO_COLOR                    # Disable ANSI colors\n\
                    RUST_LOG                              # Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (default: <config_dir>/hsq-admin/panel.toml)
    #[arg(long, global = true, env = "HSQ_ADMIN_CONFIG")]
    config: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "HSQ_ADMIN_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run the API server, plus the compiled frontend when available
    Serve {
        /// Port for the web server
        #[arg(long, default_value = "3333")]
        port: u16,
        /// Directory holding the compiled frontend (index.html)
        #[arg(long)]
        dist: Option<PathBuf>,
    },
    /// Print the menu a role would see
    Menu {
        /// Role of the signed-in user
        #[arg(long)]
        role: String,
        /// Current route, used to mark the active entry
        #[arg(long, default_value = "/")]
        path: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the configuration and list its entries
    Check,
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(no_color: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!no_color)
                .with_target(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.no_color);

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path().context("Could not determine configuration path")?,
    };
    let no_color = cli.no_color;

    match cli.command {
        Command::Serve { port, dist } => run_serve(&config_path, port, dist).await?,
        Command::Menu { role, path, json } => run_menu(&config_path, &role, &path, json, no_color)?,
        Command::Check => run_check(&config_path, no_color)?,
        Command::Init { force } => run_init(&config_path, force)?,
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<PanelConfig> {
    PanelConfig::load_or_default(path).map_err(with_suggestion)
}

fn with_suggestion(error: CoreError) -> anyhow::Error {
    match error.suggestion() {
        Some(hint) => anyhow::anyhow!("{}\n  hint: {}", error, hint),
        None => error.into(),
    }
}

async fn run_serve(config_path: &Path, port: u16, dist: Option<PathBuf>) -> Result<()> {
    let config = Arc::new(load_config(config_path)?);

    // Serve the frontend only when it has been built
    let dist = Some(dist.unwrap_or_else(|| PathBuf::from(DEFAULT_DIST)))
        .filter(|dir| dir.join("index.html").exists());

    match &dist {
        Some(dir) => {
            println!("\nBackend API + Frontend: http://localhost:{}", port);
            println!("   Frontend from:       {}", dir.display());
        }
        None => {
            println!("\nBackend API only:       http://localhost:{}/api/*", port);
            println!("   Run 'trunk build' in crates/hsq-web to compile the frontend");
        }
    }

    hsq_web::run(config, port, dist).await
}

fn run_menu(config_path: &Path, role: &str, path: &str, json: bool, no_color: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let items = config.menu(Some(role), path);
    println!("{}", cli::format_menu(&items, json, no_color));
    Ok(())
}

fn run_check(config_path: &Path, no_color: bool) -> Result<()> {
    // Skip the validation gate so every issue gets printed
    let config = match PanelConfig::load_unchecked(config_path) {
        Err(CoreError::FileNotFound { .. }) => {
            info!(
                path = %config_path.display(),
                "No configuration file, checking built-in defaults"
            );
            PanelConfig::default()
        }
        other => other.map_err(with_suggestion)?,
    };
    let report = config.validate();

    println!("{}", cli::format_entries(config.entries(), no_color));
    println!();
    println!("{}", cli::format_report(&report));

    if report.has_errors() {
        let (_, errors) = report.counts();
        bail!("{} has {} error(s)", config_path.display(), errors);
    }
    Ok(())
}

fn run_init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    PanelConfig::default()
        .save(config_path)
        .map_err(with_suggestion)?;

    println!("Wrote default configuration to {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_check_fails_on_invalid_entries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("panel.toml");
        std::fs::write(
            &path,
            r#"
[[navigation]]
name = "Rooms"
href = "rooms"
icon = "bed"
roles = ["admin"]
"#,
        )
        .unwrap();

        let err = run_check(&path, true).unwrap_err();
        assert!(err.to_string().contains("1 error(s)"));
    }

    #[test]
    fn test_check_accepts_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(run_check(&dir.path().join("panel.toml"), true).is_ok());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("panel.toml");

        run_init(&path, false).unwrap();
        assert!(run_init(&path, false).is_err());
        run_init(&path, true).unwrap();
        assert!(run_check(&path, true).is_ok());
    }
}
