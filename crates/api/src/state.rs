use std::sync::Arc;

use crate::config::ServerConfig;
use crate::planner::Planner;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: wayfarer_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The trip submission service (generator + store + in-flight guard).
    pub planner: Arc<Planner>,
}
