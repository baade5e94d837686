// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use credence_node::config::NodeConfig;
use credence_node::engine::Engine;
use credence_node::server::{build_router, SharedEngine};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "credence_node=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = NodeConfig::from_env();
    tracing::info!("Initializing Credence Node with config: {:?}", cfg);

    let engine = match Engine::open(&cfg) {
        Ok(engine) => engine,
        Err(e) => {
            // Refusing to serve on top of a corrupt state file.
            tracing::error!("Failed to open ledger state: {}", e);
            std::process::exit(1);
        }
    };

    let shared_state: SharedEngine = Arc::new(Mutex::new(engine));
    let app = build_router(shared_state);

    let addr = cfg.bind_addr;
    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
