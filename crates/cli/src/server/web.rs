use axum::Router;
use opentld_api::{create_routes, AppState};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_web_server(bind_addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        doh_url = format!("http://{}/dns-query", bind_addr),
        "Starting DoH server"
    );

    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("DoH server started successfully");

    axum::serve(listener, app).await?;

    Ok(())
}

fn create_app(state: AppState) -> Router {
    create_routes(state).layer(TraceLayer::new_for_http())
}
