//! Runtime configuration fetched from the static server.

use docuhub_core::EditorConfig;
use gloo_net::http::Request;

/// Where the server exposes the `[editor]` table.
pub const CONFIG_URL: &str = "/config.json";

async fn try_fetch(url: &str) -> Result<EditorConfig, gloo_net::Error> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(gloo_net::Error::GlooError(format!(
            "config request failed with status {}",
            response.status()
        )));
    }
    response.json::<EditorConfig>().await
}

/// Fetch the editor configuration, falling back to defaults.
pub async fn fetch_config(url: &str) -> EditorConfig {
    match try_fetch(url).await {
        Ok(config) => {
            log::debug!("loaded editor config from {url}");
            config
        }
        Err(err) => {
            log::warn!("using default editor config ({url}: {err})");
            EditorConfig::default()
        }
    }
}
