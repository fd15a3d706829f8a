//! Posts Service Bindings
//!
//! Thin REST client for the remote collection service. reqwest rides the
//! browser fetch API under wasm32, so the same code serves native tests.

use reqwest::Response;

use crate::error::ApiError;
use crate::models::{NewStory, Story, StoryPage, StoryPatch};

/// Client for the posts REST API
#[derive(Debug, Clone)]
pub struct Api {
    client: reqwest::Client,
    base: String,
}

impl Api {
    /// `base` must be an absolute URL prefix, e.g. `https://host/api`
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    /// GET /posts?search=&limit=&offset=
    pub async fn list(&self, search: &str, limit: u32, offset: u32) -> Result<StoryPage, ApiError> {
        let response = self
            .client
            .get(format!("{}/posts", self.base))
            .query(&[("search", search)])
            .query(&[("limit", limit), ("offset", offset)])
            .send()
            .await
            .map_err(transport)?;
        decode(check(response)?).await
    }

    /// POST /posts
    pub async fn create(&self, body: &NewStory<'_>) -> Result<Story, ApiError> {
        let response = self
            .client
            .post(format!("{}/posts", self.base))
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        decode(check(response)?).await
    }

    /// PATCH /posts/{id}
    pub async fn update(&self, id: u32, body: &StoryPatch<'_>) -> Result<Story, ApiError> {
        let response = self
            .client
            .patch(format!("{}/posts/{}", self.base, id))
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        decode(check(response)?).await
    }

    /// DELETE /posts/{id}
    pub async fn delete(&self, id: u32) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/posts/{}", self.base, id))
            .send()
            .await
            .map_err(transport)?;
        check(response).map(|_| ())
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Service {
            status: status.as_u16(),
        })
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Transport(format!("invalid response: {}", e)))
}
