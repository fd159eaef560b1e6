use joke_catalog::catalog::handlers::router;
use joke_catalog::catalog::service::CatalogService;
use joke_catalog::store::memory::MemoryStore;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "0.0.0.0:9090".parse()?;
    let mut seed_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--data" => {
                seed_path = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>] [--data <jokes.json>]", args[0]);
                eprintln!("Example: {} --bind 127.0.0.1:9090 --data reddit_jokes.json", args[0]);
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Record store (in-memory, optionally seeded from a corpus file):
    let store = Arc::new(MemoryStore::new());
    if let Some(path) = &seed_path {
        let count = store.seed_from_file(path)?;
        tracing::info!("Loaded {} jokes from {}", count, path.display());
    }

    // 2. Catalog service with the store injected:
    let service = Arc::new(CatalogService::new(store));

    // 3. HTTP adapter:
    let app = router(service);

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Received shutdown signal");
}
