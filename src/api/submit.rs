//! Order submission: one request, one outcome

use super::traits::OrderClientTrait;
use crate::state::{OrderRequest, SubmissionOutcome};
use uuid::Uuid;

/// Post an order and turn the result into the message shown to the user.
///
/// Exactly one request is made; failures are not retried.
pub async fn submit_order(
    client: &dyn OrderClientTrait,
    request: &OrderRequest,
) -> SubmissionOutcome {
    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, endpoint = %client.endpoint(), "Submitting order");

    match client.place_order(request).await {
        Ok(receipt) => {
            tracing::info!(%request_id, "Order accepted: {}", receipt.message);
            SubmissionOutcome::Success(receipt.message)
        }
        Err(err) => {
            tracing::warn!(%request_id, "Order failed: {err}");
            SubmissionOutcome::Failure(err.to_string())
        }
    }
}
