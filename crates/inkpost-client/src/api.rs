//! Typed HTTP client for the Inkpost REST API.

use inkpost_shared::ErrorResponse;
use inkpost_shared::dto::{CategoryResponse, PostListQuery, PostRequest, PostResponse};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::ClientError;

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    /// Client for the server at `server`, e.g. `http://127.0.0.1:8080`.
    pub fn new(server: &str) -> Result<Self, ClientError> {
        let base = Url::parse(server)
            .and_then(|u| u.join("/"))
            .map_err(|e| ClientError::Url(e.to_string()))?;
        let client = Client::builder().user_agent(Self::user_agent()).build()?;

        Ok(Self { client, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("inkpost-client/", env!("CARGO_PKG_VERSION"))
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = self
            .base
            .join(path)
            .map_err(|e| ClientError::Url(e.to_string()))?;
        Ok(self.client.request(method, url))
    }

    /// GET /api/posts
    pub async fn list_posts(&self, query: &PostListQuery) -> Result<Vec<PostResponse>, ClientError> {
        let req = self.request(Method::GET, "api/posts")?.query(query);
        read_json(req.send().await?).await
    }

    /// GET /api/posts/{id}
    pub async fn get_post(&self, id: Uuid) -> Result<PostResponse, ClientError> {
        let req = self.request(Method::GET, &format!("api/posts/{id}"))?;
        read_json(req.send().await?).await
    }

    /// POST /api/posts
    pub async fn create_post(&self, body: &PostRequest) -> Result<PostResponse, ClientError> {
        let req = self.request(Method::POST, "api/posts")?.json(body);
        read_json(req.send().await?).await
    }

    /// PUT /api/posts/{id}
    pub async fn update_post(&self, id: Uuid, body: &PostRequest) -> Result<PostResponse, ClientError> {
        let req = self
            .request(Method::PUT, &format!("api/posts/{id}"))?
            .json(body);
        read_json(req.send().await?).await
    }

    /// DELETE /api/posts/{id}
    pub async fn delete_post(&self, id: Uuid) -> Result<(), ClientError> {
        let req = self.request(Method::DELETE, &format!("api/posts/{id}"))?;
        check(req.send().await?).await.map(|_| ())
    }

    /// GET /api/categories
    pub async fn list_categories(&self) -> Result<Vec<CategoryResponse>, ClientError> {
        let req = self.request(Method::GET, "api/categories")?;
        read_json(req.send().await?).await
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    Ok(check(resp).await?.json().await?)
}

/// Turn non-success statuses into typed errors.
async fn check(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound);
    }

    let text = resp.text().await.unwrap_or_default();
    let problem = serde_json::from_str::<ErrorResponse>(&text).ok();

    if status == StatusCode::BAD_REQUEST
        && let Some(errors) = problem.as_ref().and_then(|p| p.errors.clone())
    {
        return Err(ClientError::Validation(errors));
    }

    let message = problem
        .and_then(|p| p.detail.or(Some(p.title)))
        .unwrap_or(text);
    Err(ClientError::Server {
        status: status.as_u16(),
        message,
    })
}
