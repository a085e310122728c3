//! Application state module

mod app_state;
mod forms;
mod order;

pub use app_state::*;
pub use forms::*;
pub use order::*;
