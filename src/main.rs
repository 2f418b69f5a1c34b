use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use courier_backend::config::Config;
use courier_backend::routes;
use courier_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courier_backend=debug,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let addr = config.addr;
    let state = Arc::new(AppState::new(config));

    // Evict transcripts abandoned past the session TTL.
    let sessions = state.sessions.clone();
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(Duration::from_secs(60));
        loop {
            tick.tick().await;
            let purged = sessions.purge_expired().await;
            if purged > 0 {
                tracing::debug!("purged {purged} idle sessions");
            }
        }
    });

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("🚀 courier backend running at http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
