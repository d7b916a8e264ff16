use std::sync::Arc;

use crate::config::ServerConfig;
use crate::engine::analytics::AnalyticsAggregator;
use crate::engine::lifecycle::ApplicationLifecycle;
use crate::engine::profiles::ProfileCoordinator;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup and cloned per request; inner data is behind `Arc`
/// or is already cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: hireboard_db::DbPool,
    /// Server configuration (JWT, OAuth, CORS, timeouts).
    pub config: Arc<ServerConfig>,
    /// Apply / list / status-transition operations on applications.
    pub lifecycle: Arc<ApplicationLifecycle>,
    /// Recruiter dashboard statistics.
    pub analytics: Arc<AnalyticsAggregator>,
    /// Seeker and company profile reads and replace-on-update writes.
    pub profiles: Arc<ProfileCoordinator>,
    /// Outbound HTTP client (OAuth code exchange).
    pub http: reqwest::Client,
}

impl AppState {
    /// Wire every engine onto the same pool.
    pub fn new(pool: hireboard_db::DbPool, config: ServerConfig, http: reqwest::Client) -> Self {
        Self {
            lifecycle: Arc::new(ApplicationLifecycle::new(pool.clone())),
            analytics: Arc::new(AnalyticsAggregator::new(pool.clone())),
            profiles: Arc::new(ProfileCoordinator::new(pool.clone())),
            pool,
            config: Arc::new(config),
            http,
        }
    }
}
