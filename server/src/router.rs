//! HTTP routes: editor configuration plus the built site with SPA fallback.
//!
//! The login route is never answered with the editor shell: it serves
//! `login.html` from the site root when present and 404 otherwise.

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use docuhub_core::EditorConfig;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
};

use crate::config::ServerConfig;

/// Shared router state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The `[editor]` table handed to the browser.
    pub editor: Arc<EditorConfig>,
}

impl AppState {
    pub fn new(editor: EditorConfig) -> Self {
        Self {
            editor: Arc::new(editor),
        }
    }
}

/// Path of the editor configuration document.
pub const CONFIG_PATH: &str = "/config.json";

/// The login route when it is a path this server can answer for.
fn local_login_path(editor: &EditorConfig) -> Option<&str> {
    let route = editor.login_route.as_str();
    let reserved = route == "/" || route == CONFIG_PATH;
    let plain = !route.contains(['{', '}', '*', '?', '#']);
    (route.starts_with('/') && !reserved && plain).then_some(route)
}

/// Create the server router for `config`.
pub fn create_router(config: &ServerConfig) -> Router {
    let index = config.site_root.join("index.html");
    let site = ServeDir::new(&config.site_root).fallback(ServeFile::new(index));

    let mut router = Router::new().route(CONFIG_PATH, get(editor_config));
    if let Some(login) = local_login_path(&config.editor) {
        let login_page = ServeFile::new(config.site_root.join("login.html"));
        router = router.route_service(login, login_page);
    }

    router
        .fallback_service(site)
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(AppState::new(config.editor.clone()))
}

async fn editor_config(State(state): State<AppState>) -> Json<EditorConfig> {
    Json(state.editor.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use docuhub_core::EndpointStyle;
    use tower::ServiceExt;

    use super::*;

    fn site(dir: &Path) {
        std::fs::write(dir.join("index.html"), "<html><body>editor</body></html>").unwrap();
        std::fs::create_dir(dir.join("pkg")).unwrap();
        std::fs::write(dir.join("pkg").join("docuhub.css"), "body { margin: 0; }").unwrap();
    }

    fn config(dir: &Path) -> ServerConfig {
        let mut config = ServerConfig {
            site_root: dir.to_path_buf(),
            ..ServerConfig::default()
        };
        config.editor.endpoint_style = EndpointStyle::Documents;
        config.editor.api_base = "https://api.example.com".to_string();
        config
    }

    async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_config_json_reflects_editor_table() {
        let dir = tempfile::tempdir().unwrap();
        site(dir.path());

        let (status, body) = get_body(create_router(&config(dir.path())), "/config.json").await;
        assert_eq!(status, StatusCode::OK);

        let served: EditorConfig = serde_json::from_str(&body).unwrap();
        assert_eq!(served, config(dir.path()).editor);

        let raw: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(raw["endpoint_style"], "documents");
        assert_eq!(raw["login_route"], "/login");
    }

    #[tokio::test]
    async fn test_login_route_does_not_serve_editor() {
        let dir = tempfile::tempdir().unwrap();
        site(dir.path());

        let (status, body) = get_body(create_router(&config(dir.path())), "/login").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.contains("editor"));
    }

    #[tokio::test]
    async fn test_login_route_serves_login_page() {
        let dir = tempfile::tempdir().unwrap();
        site(dir.path());
        std::fs::write(dir.path().join("login.html"), "<html>sign in</html>").unwrap();
        let mut config = config(dir.path());
        config.editor.login_route = "/auth/sign-in".to_string();

        let (status, body) = get_body(create_router(&config), "/auth/sign-in").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>sign in</html>");

        let (status, body) = get_body(create_router(&config), "/login").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("editor"));
    }

    #[test]
    fn test_external_login_route_is_not_routed() {
        let mut editor = EditorConfig::default();
        assert_eq!(local_login_path(&editor), Some("/login"));

        editor.login_route = "https://auth.example.com/login".to_string();
        assert_eq!(local_login_path(&editor), None);

        editor.login_route = CONFIG_PATH.to_string();
        assert_eq!(local_login_path(&editor), None);
    }

    #[tokio::test]
    async fn test_serves_static_assets() {
        let dir = tempfile::tempdir().unwrap();
        site(dir.path());

        let (status, body) =
            get_body(create_router(&config(dir.path())), "/pkg/docuhub.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body { margin: 0; }");
    }

    #[tokio::test]
    async fn test_unknown_routes_fall_back_to_index() {
        let dir = tempfile::tempdir().unwrap();
        site(dir.path());

        let (status, body) = get_body(create_router(&config(dir.path())), "/docs/guide").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("editor"));
    }

    #[tokio::test]
    async fn test_compresses_when_accepted() {
        let dir = tempfile::tempdir().unwrap();
        site(dir.path());
        std::fs::write(dir.path().join("big.txt"), "docuhub ".repeat(512)).unwrap();

        let response = create_router(&config(dir.path()))
            .oneshot(
                Request::builder()
                    .uri("/big.txt")
                    .header(header::ACCEPT_ENCODING, "gzip")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_ENCODING).unwrap(),
            "gzip"
        );
    }
}
