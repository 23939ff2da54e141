//! adboard - a small, self-hostable advertisement record service
//!
//! [`store`] owns the record schema and scoped sessions; [`api`] maps the
//! HTTP surface onto storage operations.

pub mod api;
pub mod cli;
pub mod config;
pub mod store;
