//! HTTP API.
//!
//! - [`router`] - route table and server startup
//! - [`handlers`] - request handlers and error mapping
//! - [`state`] - shared application state

pub mod handlers;
mod router;
mod state;

pub use router::{create_router, start_server};
pub use state::AppState;
