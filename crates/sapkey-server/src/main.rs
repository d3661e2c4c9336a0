use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use sapkey_server::config::{DEFAULT_PORT, DEFAULT_STORE_PATH};
use sapkey_server::{seed_key, serve, ServerConfig};
use sapkey_store::{FileKeyStore, KeyStore};
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sapkey-server", version, about = "SAP key retrieval endpoint")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve GET /api/sapkey
    Serve(ServeArgs),
    /// Add a key record to the store
    Seed(SeedArgs),
}

#[derive(Debug, Args)]
struct StoreArgs {
    /// Key store file
    #[arg(long, env = "SAPKEY_STORE", default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,
}

#[derive(Debug, Args)]
struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Interface to bind
    #[arg(long, env = "SAPKEY_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    #[command(flatten)]
    store: StoreArgs,
}

#[derive(Debug, Args)]
struct SeedArgs {
    /// Key to insert
    #[arg(long)]
    key: String,

    #[command(flatten)]
    store: StoreArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Command::Serve(args) => run_serve(args).await,
        Command::Seed(args) => run_seed(args).await,
    }
}

async fn run_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = ServerConfig::new()
        .with_host(args.host)
        .with_port(args.port)
        .with_store_path(args.store.store);

    let store = Arc::new(FileKeyStore::new(config.store_path.clone()));

    // An unreachable store is reported but does not stop the server;
    // requests answer 500 until it becomes readable.
    match store.len().await {
        Ok(count) => tracing::info!(
            path = %config.store_path.display(),
            count,
            "Connected to key store"
        ),
        Err(e) => tracing::error!(error = %e, "Key store connection error"),
    }

    serve(&config, store, shutdown_signal()).await?;
    Ok(())
}

async fn run_seed(args: SeedArgs) -> anyhow::Result<()> {
    let store = FileKeyStore::new(args.store.store);
    let record = seed_key(&store, &args.key)
        .await
        .with_context(|| format!("seeding {}", store.path().display()))?;

    println!("Inserted key {} into {}", record.key, store.path().display());
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
