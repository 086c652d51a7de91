mod cli;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use bakehouse_core::config::Config;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging.
    // Respect RUST_LOG if set, otherwise use defaults based on the verbose flag.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "bakehouse=trace,bakehouse_server=trace,bakehouse_db=trace,bakehouse_core=debug,tower_http=debug"
                .to_string()
        } else {
            "bakehouse=info,bakehouse_server=info,bakehouse_db=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Serve { host, port, db } => {
            let config = load_config(cli.config.as_deref(), host, port, db);
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(bakehouse_server::start(config))?;
            Ok(())
        }
        Commands::Seed { db } => seed_database(cli.config.as_deref(), db),
        Commands::Version => {
            println!("bakehouse {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Resolve the layered configuration: defaults, then the optional config
/// file, then BAKEHOUSE_* environment variables, then CLI flags.
fn load_config(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    db: Option<PathBuf>,
) -> Config {
    let mut config = Config::load_or_default(config_path);
    config.apply_env();

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(db) = db {
        config.server.db_path = db;
    }

    config
}

fn seed_database(config_path: Option<&Path>, db: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path, None, None, db);
    let db_str = config.server.db_path.to_string_lossy();

    let pool = bakehouse_db::pool::init_pool(&db_str)?;
    let conn = bakehouse_db::pool::get_conn(&pool)?;
    let summary = bakehouse_db::seed::seed_demo_data(&conn)?;

    println!(
        "Seeded {} bakeries and {} baked goods into {}",
        summary.bakeries, summary.baked_goods, db_str
    );
    Ok(())
}
