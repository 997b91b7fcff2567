use clap::Parser;

use todos_rs::cli::{Cli, Commands};
use todos_rs::config::ConfigLoader;
use todos_rs::db::run_pending_migrations;
use todos_rs::logger::init_logger;
use todos_rs::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loader = match cli.config.clone() {
        Some(path) => ConfigLoader::with_file(path),
        None => ConfigLoader::new(),
    };
    let mut settings = loader.load()?;

    if let Some(level) = cli.log_level_override() {
        settings.logger.level = level.to_string();
    }

    init_logger(&settings.logger)?;

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    }) {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }
            Server::new(settings).run().await
        }
        Commands::Migrate => {
            run_pending_migrations(&settings.database.url).await?;
            tracing::info!("Migrations complete");
            Ok(())
        }
    }
}
