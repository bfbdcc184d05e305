//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Dataset**: Reports the number of loaded records; an empty catalog is
///    degraded because no domain can ever be flagged
/// 2. **Registration**: Reports whether lookups are configured, without
///    touching the network
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "dataset": {
///       "status": "ok",
///       "message": "27 flagged domains loaded"
///     },
///     "registration": {
///       "status": "ok",
///       "message": "Registration lookups enabled"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let dataset_check = check_dataset(&state);

    let registration_check = check_registration(&state);

    let all_healthy = dataset_check.status == "ok" && registration_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            dataset: dataset_check,
            registration: registration_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the reference dataset holds at least one record.
fn check_dataset(state: &AppState) -> CheckStatus {
    let count = state.catalog.len();

    if count == 0 {
        CheckStatus {
            status: "error".to_string(),
            message: Some("No flagged domains loaded".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} flagged domains loaded", count)),
        }
    }
}

/// Reports registration lookup configuration.
fn check_registration(state: &AppState) -> CheckStatus {
    let message = if state.registration.is_enabled() {
        "Registration lookups enabled"
    } else {
        "Registration lookups disabled"
    };

    CheckStatus {
        status: "ok".to_string(),
        message: Some(message.to_string()),
    }
}
