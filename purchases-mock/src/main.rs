use std::sync::Arc;

use purchases_mock::{AppState, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let port: u16 = std::env::var("MOCK_HTTP_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5099);

    let state = Arc::new(AppState::new());
    seed(&state);

    let addr = format!("0.0.0.0:{port}");
    tracing::info!(%addr, "purchases mock listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}

/// A little starter data so the screens have something to show
fn seed(state: &AppState) {
    let plumbing = state.seed_category("Plumbing", "Pipes and fittings", true);
    let legal = state.seed_category("Legal", "Outside counsel", true);
    state.seed_category("Archived Services", "No longer offered", false);

    state.seed_vendor("Acme Pipes", plumbing, "Plumbing");
    let in_use = state.seed_vendor("Harbor Legal", legal, "Legal");
    state.mark_vendor_in_use(in_use);
}
