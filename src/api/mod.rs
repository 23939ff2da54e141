//! # API Layer
//!
//! HTTP surface for advertisement records.
//!
//! # Supported Operations
//!
//! - `POST /advertisement` - create
//! - `GET /advertisement/{id}` - fetch by id
//! - `PATCH /advertisement/{id}` - partial update
//! - `DELETE /advertisement/{id}` - delete
//! - `GET /advertisement` - filtered search, newest first
//! - `GET /` - liveness banner
//!
//! Requests are stateless; every handler validates its input, opens one
//! scoped store session, performs one storage operation, and serializes
//! the result.

mod errors;
mod request;
mod server;

pub use errors::{ApiError, ApiResult, ErrorResponse, FieldViolation};
pub use request::{CreateAdvertisement, SearchQuery, UpdateAdvertisement};
pub use server::ApiServer;
