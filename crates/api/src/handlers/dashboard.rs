//! Handler for the recruiter dashboard.

use axum::extract::State;
use axum::Json;
use hireboard_db::models::dashboard::DashboardStats;

use crate::error::AppResult;
use crate::middleware::rbac::RequireRecruiter;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/stats
pub async fn get_stats(
    RequireRecruiter(user): RequireRecruiter,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardStats>>> {
    let stats = state.analytics.dashboard_stats(user.user_id).await?;
    Ok(Json(DataResponse { data: stats }))
}
