use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::frontend::models::{AuditEvent, User};
use crate::paging::{PageFeed, PageQuery, query};

const API_BASE: &str = "/api/v1";

/// Error payload the backend sends with non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub details: Option<String>,
}

/// API client error type
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {}", .0.error)]
    Server(ApiError),
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

type Result<T> = std::result::Result<T, FetchError>;

/// Helper function to handle API responses
async fn handle_response<T: DeserializeOwned>(
    request: gloo_net::http::RequestBuilder,
) -> Result<T> {
    let response = request
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();

    if status >= 200 && status < 300 {
        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Deserialization(e.to_string()))
    } else {
        let error = response
            .json::<ApiError>()
            .await
            .map_err(|e| FetchError::Deserialization(e.to_string()))?;
        Err(FetchError::Server(error))
    }
}

/// Users API
pub mod users {
    use super::*;

    /// List users, optionally narrowed by a name/email search term.
    pub async fn list(page: PageQuery, filter: Option<String>) -> Result<PageFeed<User>> {
        let mut params = page.as_params();
        if let Some(term) = filter {
            params.push(("q".to_string(), term));
        }
        let url = format!("{}/users?{}", API_BASE, query::serialize(&params));
        handle_response(Request::get(&url)).await
    }
}

/// Audit log API
pub mod audit {
    use super::*;

    pub async fn list(page: PageQuery) -> Result<PageFeed<AuditEvent>> {
        let url = format!("{}/audit?{}", API_BASE, query::serialize(&page.as_params()));
        handle_response(Request::get(&url)).await
    }
}
