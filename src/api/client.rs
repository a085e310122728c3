//! HTTP client for the pizza order service
//!
//! Orders are posted as JSON to a fixed path under the configured base
//! address. Both success and error responses carry a `message` field that is
//! shown to the user verbatim.

use super::traits::OrderClientTrait;
use crate::state::OrderRequest;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Default order service address
pub const DEFAULT_ADDRESS: &str = "http://localhost:9009";

/// Path orders are posted to
pub const ORDER_PATH: &str = "/api/order";

/// Errors produced while placing an order
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// The service refused the order and said why
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The service refused the order without a readable message
    #[error("order failed with status {status}")]
    Status { status: u16 },
    /// A success status with a body we could not read
    #[error("unexpected response from order service")]
    UnexpectedResponse,
}

/// Body of a successful order response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderReceipt {
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for communicating with the order service
#[derive(Debug, Clone)]
pub struct OrderClient {
    http: reqwest::Client,
    endpoint: String,
}

impl OrderClient {
    /// Create a client posting to `{address}/api/order`
    pub fn new(address: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: format!("{}{}", address.trim_end_matches('/'), ORDER_PATH),
        })
    }
}

#[async_trait]
impl OrderClientTrait for OrderClient {
    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }

    async fn place_order(&self, request: &OrderRequest) -> Result<OrderReceipt, ApiError> {
        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;
        parse_response(status, &body)
    }
}

/// Map a response status and body to a receipt or error
fn parse_response(status: StatusCode, body: &str) -> Result<OrderReceipt, ApiError> {
    if status.is_success() {
        return serde_json::from_str::<OrderReceipt>(body).map_err(|e| {
            tracing::warn!("Unreadable order response: {e}");
            ApiError::UnexpectedResponse
        });
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => Err(ApiError::Rejected {
            status: status.as_u16(),
            message: err.message,
        }),
        Err(_) => Err(ApiError::Status {
            status: status.as_u16(),
        }),
    }
}
