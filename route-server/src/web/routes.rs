//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::catalog::CatalogError;
use crate::domain::{NetworkKind, NodeStatus};
use crate::planner::{PlanError, Planner, generate_route_options};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/nodes", get(list_nodes))
        .route("/api/nodes/:id", get(get_node))
        .route("/api/routes/optimize", post(optimize_route))
        .route("/api/routes/options", get(route_options))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List catalog nodes, optionally filtered by network and status.
async fn list_nodes(
    State(state): State<AppState>,
    query: Result<Query<NodeListQuery>, QueryRejection>,
) -> Result<Json<NodeListResponse>, AppError> {
    let Query(req) = query.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;

    let network = req
        .network
        .as_deref()
        .map(str::parse::<NetworkKind>)
        .transpose()
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;

    let status = req
        .status
        .as_deref()
        .map(str::parse::<NodeStatus>)
        .transpose()
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;

    let catalog = state.catalog.nodes().await?;
    let nodes: Vec<_> = catalog
        .iter()
        .filter(|node| network.is_none_or(|n| node.network() == n))
        .filter(|node| status.is_none_or(|s| node.status() == s))
        .cloned()
        .collect();

    Ok(Json(NodeListResponse {
        success: true,
        count: nodes.len(),
        nodes,
    }))
}

/// Fetch a single node by id.
async fn get_node(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NodeResponse>, AppError> {
    let node = state
        .catalog
        .find(&id)
        .await?
        .ok_or_else(|| AppError::NotFound {
            message: format!("Node {id} not found"),
        })?;

    Ok(Json(NodeResponse {
        success: true,
        node,
    }))
}

/// Plan a route through the catalog.
async fn optimize_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<OptimizeRouteResponse>, AppError> {
    // Parse JSON manually so malformed bodies get the same error shape
    let req: OptimizeRouteRequest = if body.is_empty() {
        OptimizeRouteRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, body_len = body.len(), "bad optimize request");
            AppError::BadRequest {
                message: format!("Invalid JSON: {e}"),
            }
        })?
    };

    let query = req.into_query(&state.config)?;
    let catalog = state.catalog.nodes().await?;

    let route = Planner::new(&state.config).plan(&catalog, &query)?;
    info!(
        criterion = %query.criterion,
        nodes = route.node_count(),
        distance_km = route.total_distance_km,
        "route optimized"
    );

    Ok(Json(OptimizeRouteResponse::new(route)))
}

/// Plan every preset for an optional origin.
async fn route_options(
    State(state): State<AppState>,
    query: Result<Query<RouteOptionsQuery>, QueryRejection>,
) -> Result<Json<RouteOptionsResponse>, AppError> {
    // Unparseable lat/lng is a route query error
    let Query(req) = query.map_err(|e| AppError::InvalidQuery {
        message: e.body_text(),
    })?;
    let origin = req.origin()?;
    let catalog = state.catalog.nodes().await?;

    let planner = Planner::new(&state.config);
    let options = generate_route_options(&catalog, origin, &planner)
        .into_iter()
        .map(RouteOptionView::from)
        .collect();

    Ok(Json(RouteOptionsResponse {
        success: true,
        options,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request that is not a route query (bad JSON, bad filter)
    BadRequest { message: String },
    /// Route query rejected by the planner or its parameter parsing
    InvalidQuery { message: String },
    NotFound { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl AppError {
    /// Stable machine-readable kind, matching [`PlanError::kind`] where
    /// the error came from planning.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::BadRequest { .. } => "bad_request",
            AppError::InvalidQuery { .. } => "invalid_query",
            AppError::NotFound { .. } => "not_found",
            AppError::Unprocessable { .. } => "no_candidates",
            AppError::Internal { .. } => "internal",
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        let message = e.to_string();
        match e {
            PlanError::InvalidQuery(_) => AppError::InvalidQuery { message },
            PlanError::NoCandidates { .. } => AppError::Unprocessable { message },
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let (status, message) = match self {
            AppError::BadRequest { message } | AppError::InvalidQuery { message } => {
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, kind, "{message}");
        } else {
            warn!(%status, kind, "{message}");
        }

        let body = Json(ErrorResponse {
            success: false,
            error: message,
            kind,
        });
        (status, body).into_response()
    }
}
