#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use leptos::config::get_configuration;

use crate::config::SiteConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // `.env` is optional; real environment variables take precedence.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = SiteConfig::from_env()?;
    let leptos_options = get_configuration(None)
        .map_err(|e| ServerError::Leptos(e.to_string()))?
        .leptos_options;

    let app = routes::app(leptos_options);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "first principles site listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
