//! Web layer for the route server.
//!
//! Provides HTTP endpoints for browsing the node catalog and planning routes.

mod dto;
mod routes;
mod state;


pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
