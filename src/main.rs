use clap::Parser;
use tracing_subscriber::EnvFilter;

use plant_space::config::Config;
use plant_space::db::Store;
use plant_space::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("plant_space=info,warp=info")),
        )
        .init();

    let config = Config::parse();
    let store = Store::open(&config.database_url)?;

    let (addr, server) = warp::serve(routes::api(store.clone()))
        .try_bind_with_graceful_shutdown(config.addr(), async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!(%err, "failed to listen for shutdown signal");
            }
        })?;

    tracing::info!(%addr, "listening");
    server.await;
    tracing::info!("shutting down");

    store.close();
    Ok(())
}
