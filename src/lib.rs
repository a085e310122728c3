//! Pizza Order TUI - a terminal form for ordering pizza
//!
//! The order form validates as you type and only lets a complete order be
//! submitted. Orders are posted to the pizza order service over HTTP.

pub mod api;
pub mod app;
pub mod config;
pub mod numeric;
pub mod platform;
pub mod state;
pub mod ui;
