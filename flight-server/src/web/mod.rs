//! Web layer for the flight feed analyzer.
//!
//! Provides HTTP endpoints over the analysis queries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
