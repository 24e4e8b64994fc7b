use anyhow::Context;
use resource_directory::api;
use resource_directory::config::Vocabulary;
use resource_directory::store::memory::MemoryStore;
use resource_directory::store::types::{Kind, SeedFile};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: Option<SocketAddr> = None;
    let mut data_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--data" => {
                data_path = Some(args[i + 1].clone());
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let (Some(bind_addr), Some(data_path)) = (bind_addr, data_path) else {
        eprintln!("Usage: {} --bind <addr:port> --data <seed.json>", args[0]);
        eprintln!("Example: {} --bind 127.0.0.1:5000 --data data/seed.json", args[0]);
        std::process::exit(1);
    };

    // 1. Seed the read-only store:
    let raw = std::fs::read_to_string(&data_path)
        .with_context(|| format!("reading seed file {data_path}"))?;
    let seed: SeedFile =
        serde_json::from_str(&raw).with_context(|| format!("parsing seed file {data_path}"))?;
    let store = Arc::new(MemoryStore::from_seed(seed)?);
    for kind in Kind::ALL {
        tracing::info!("Loaded {} {} resources", store.len(kind), kind);
    }

    // 2. Vocabulary tables, fixed for the process lifetime:
    let vocab = Arc::new(Vocabulary::builtin());

    // 3. HTTP router:
    let app = api::router(store, vocab);

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
