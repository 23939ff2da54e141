//! # API HTTP Server
//!
//! Axum-based HTTP server for the advertisement endpoints.
//!
//! The store handle is injected as shared state; handlers open one
//! scoped session per request and translate storage results into HTTP
//! responses.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::errors::{ApiError, ApiResult};
use super::request::{CreateAdvertisement, SearchQuery, UpdateAdvertisement};
use crate::config::ServiceConfig;
use crate::store::{AdStore, Advertisement};

/// Shared state type
type ServerState = Arc<AdStore>;

/// HTTP server for the advertisement API
pub struct ApiServer {
    config: ServiceConfig,
    router: Router,
}

impl ApiServer {
    /// Create a server over the given store.
    pub fn new(config: ServiceConfig, store: Arc<AdStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the Axum router
    fn build_router(config: &ServiceConfig, store: Arc<AdStore>) -> Router {
        // Permissive CORS when no origins are configured
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/", get(banner_handler))
            .route("/advertisement", get(search_handler).post(create_handler))
            .route(
                "/advertisement/{id}",
                get(get_handler).patch(update_handler).delete(delete_handler),
            )
            .with_state(store)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!(%addr, "advertisement service listening");

        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

/// Liveness banner handler
async fn banner_handler() -> Json<Value> {
    Json(json!({ "message": "Advertisement Service API" }))
}

/// Create record handler
async fn create_handler(
    State(store): State<ServerState>,
    Json(payload): Json<CreateAdvertisement>,
) -> ApiResult<(StatusCode, Json<Advertisement>)> {
    let new_ad = payload.validate()?;

    let mut session = store.session().await?;
    let created = session.insert(&new_ad).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get single record handler
async fn get_handler(
    State(store): State<ServerState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Advertisement>> {
    let mut session = store.session().await?;
    let ad = session.fetch(id).await?.ok_or(ApiError::NotFound(id))?;
    Ok(Json(ad))
}

/// Partial update handler
async fn update_handler(
    State(store): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateAdvertisement>,
) -> ApiResult<Json<Advertisement>> {
    let patch = payload.validate()?;

    let mut session = store.session().await?;
    let updated = session
        .update_fields(id, &patch)
        .await?
        .ok_or(ApiError::NotFound(id))?;
    Ok(Json(updated))
}

/// Delete record handler
async fn delete_handler(
    State(store): State<ServerState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    let mut session = store.session().await?;
    if !session.delete(id).await? {
        return Err(ApiError::NotFound(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Filtered search handler
async fn search_handler(
    State(store): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<Advertisement>>> {
    let filter = query.validate()?;

    let mut session = store.session().await?;
    let matches = session.search(&filter).await?;
    Ok(Json(matches))
}
