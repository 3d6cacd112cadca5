use anyhow::Result;
use api::{AppState, routes};
use common::{error::SupabaseError, server::ServerConfig, supabase::SupabaseConfig};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting API service");

    let server_config = ServerConfig::load("API", "0.0.0.0:3001")?;

    let supabase_config = match SupabaseConfig::from_env() {
        Ok(config) => Some(config),
        Err(SupabaseError::NotConfigured) => None,
        Err(e) => return Err(e.into()),
    };
    let app_state = AppState::new(supabase_config)?;

    // Check backend connectivity
    if let Some(client) = &app_state.supabase {
        match client.health_check().await {
            Ok(_) => info!("Backend connection successful"),
            Err(e) => warn!("Backend health check failed: {}", e),
        }
    } else {
        error!("{}", SupabaseError::NotConfigured);
    }

    info!("API service initialized successfully");

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&server_config.bind_addr).await?;
    info!("API service listening on {}", server_config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
