//! HTTP client for the document API, built on gloo-net.

use docuhub_core::{
    ApiError, DocumentApi, DocumentContent, EditorConfig, Endpoints, Result, SaveReceipt,
    TreeNode,
    api::{bearer, parse_receipt, parse_response},
};
use gloo_net::http::{Request, Response};

/// [`DocumentApi`] over the browser's `fetch`.
#[derive(Debug, Clone)]
pub struct HttpDocumentApi {
    endpoints: Endpoints,
}

impl HttpDocumentApi {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            endpoints: Endpoints::new(config),
        }
    }
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::network(err.to_string())
}

/// Drain the response into `(status, body)`.
async fn read(response: Response) -> Result<(u16, String)> {
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    Ok((status, body))
}

impl DocumentApi for HttpDocumentApi {
    async fn fetch_tree(&self, token: &str) -> Result<Vec<TreeNode>> {
        let response = Request::get(&self.endpoints.tree())
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network)?;
        let (status, body) = read(response).await?;
        parse_response(status, &body)
    }

    async fn fetch_content(&self, token: &str, path: &str) -> Result<DocumentContent> {
        let response = Request::get(&self.endpoints.content(path))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network)?;
        let (status, body) = read(response).await?;
        parse_response(status, &body)
    }

    async fn save_content(&self, token: &str, path: &str, content: &str) -> Result<SaveReceipt> {
        let response = Request::post(&self.endpoints.content(path))
            .header("Authorization", &bearer(token))
            .json(&DocumentContent::new(content))
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let (status, body) = read(response).await?;
        parse_receipt(status, &body)
    }

    async fn publish(&self, token: &str) -> Result<SaveReceipt> {
        let response = Request::post(&self.endpoints.publish())
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network)?;
        let (status, body) = read(response).await?;
        parse_receipt(status, &body)
    }
}
