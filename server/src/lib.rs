//! DocuHub static server.
//!
//! Serves the built editor (`index.html`, `pkg/`) with a fallback to
//! `index.html` for client-side routes and exposes the `[editor]` table of
//! the configuration file as `/config.json`. The login route is excluded from
//! the fallback.

pub mod config;
pub mod router;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, ServerConfig};
pub use router::{AppState, CONFIG_PATH, create_router};

/// Bind `config.site_addr` and serve until the process is stopped.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    if !config.site_root.join("index.html").exists() {
        log::warn!(
            "{} has no index.html; build the frontend first",
            config.site_root.display()
        );
    }

    let listener = tokio::net::TcpListener::bind(config.site_addr).await?;
    log::info!(
        "serving {} on http://{}",
        config.site_root.display(),
        listener.local_addr()?
    );

    axum::serve(listener, create_router(&config)).await
}
