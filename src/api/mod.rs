//! Order service client module for HTTP communication

mod client;
mod submit;
mod traits;

pub use client::{ApiError, OrderClient, OrderReceipt, DEFAULT_ADDRESS, ORDER_PATH};
pub use submit::submit_order;
pub use traits::OrderClientTrait;

#[cfg(test)]
pub use traits::MockOrderClientTrait;
