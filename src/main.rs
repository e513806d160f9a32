use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use sakila::adapter::inbound::cli::command::Cli;
use sakila::adapter::inbound::cli::console::TerminalConsole;
use sakila::adapter::inbound::cli::menu::Menu;
use sakila::adapter::outbound::sqlite::SqliteStore;
use sakila::application::Catalog;
use sakila::infrastructure::bootstrap::open_store;
use sakila::infrastructure::config::settings::Config;
use sakila::infrastructure::paths;

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config_path_or(paths::default_config());
    let config = if cli.config_required() {
        Config::load(&path)
    } else {
        Config::load_or_default(&path)
    }
    .with_context(|| format!("failed to load config from {}", path.display()))?;

    let config = config.with_database_url(cli.database.clone());
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn startup(config: &Config) -> anyhow::Result<SqliteStore> {
    open_store(&config.database)
        .with_context(|| format!("failed to open database {}", config.database.url))
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            std::process::exit(1);
        }
    };

    config.init_logging(cli.verbose);
    info!(version = env!("CARGO_PKG_VERSION"), "sakila starting");

    let store = match startup(&config) {
        Ok(store) => store,
        Err(e) => {
            let message = format!("{e:#}");
            error!(error = %message, "startup failed");
            std::process::exit(1);
        }
    };

    let mut menu = Menu::new(Catalog::new(store), TerminalConsole::new());
    if let Err(e) = menu.run().await {
        error!(error = %e, "console failed");
        std::process::exit(1);
    }

    info!("sakila stopped");
}
