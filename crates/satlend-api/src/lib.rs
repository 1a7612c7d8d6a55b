//! Satlend-api: HTTP API layer for Satlend
//!
//! Exposes the loan economics engine and contract status model to the web
//! front-ends. Every route is a thin consumer of the `loans` crate; no domain
//! rules live here.

pub mod dto;
pub mod routes;
pub mod server;
pub mod state;

pub use server::*;
pub use state::{AppState, PriceTick};
