//! Trait abstraction for the order client to enable mocking in tests

use super::client::{ApiError, OrderReceipt};
use crate::state::OrderRequest;
use async_trait::async_trait;

/// Trait for order service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderClientTrait: Send + Sync {
    /// Full URL orders are posted to
    fn endpoint(&self) -> String;

    /// Post one order and return the service's receipt
    async fn place_order(&self, request: &OrderRequest) -> Result<OrderReceipt, ApiError>;
}
