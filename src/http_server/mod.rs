//! # HTTP Server Module
//!
//! The fake registry's HTTP JSON API: one route module per entity family,
//! a shared [`AppState`] carrying the store handle, session extraction, and
//! structured [`ApiError`] responses.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/_fake/*` - Store snapshot, seeding, fake async processing
//! - `/api/<entity>/*` - CRUD/search per entity family

pub mod auth;
pub mod config;
pub mod errors;
pub mod server;
pub mod state;

pub mod account_routes;
pub mod ai_review_routes;
pub mod datasheet_routes;
pub mod fake_routes;
pub mod org_routes;
pub mod order_quote_routes;
pub mod package_routes;
pub mod release_routes;
pub mod session_routes;
pub mod snippet_routes;

pub use auth::{AuthContext, AuthRequirement, OptionalSessionAuth, SessionAuth};
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::{api_router, HttpServer};
pub use state::AppState;
