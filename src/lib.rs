//! Chat proxy for the portfolio site, plus the browser-side interaction
//! model (chat widget, suggestion carousel, and the avatar scene).

pub mod client;
pub mod config;
pub mod model;
pub mod state;
pub mod web;
