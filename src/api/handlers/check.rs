//! Handler for the reliability check endpoint.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::check::{CheckQuery, ReliabilityReport};
use crate::domain::entities::SocialSignals;
use crate::error::AppError;
use crate::state::AppState;

/// Evaluates a URL against the reference dataset of unreliable sources.
///
/// # Endpoint
///
/// `GET /check?url=<absolute-url>`
///
/// # Response
///
/// ```json
/// {
///   "is_reliable": false,
///   "message": "This website is in the list of known unreliable sources.",
///   "domain": "dubious-news.com",
///   "registration_info": {
///     "registrar": "Example Registrar",
///     "created": "2016-02-29"
///   },
///   "media_details": {
///     "publisher_name": "Dubious News",
///     "factual_reporting": "Low",
///     "bias": "Questionable",
///     "source_url": "https://ratings.example.org/dubious-news/"
///   },
///   "auxiliary_signals": {
///     "twitter_shares": 431,
///     "facebook_shares": 77,
///     "reddit_mentions": 902
///   }
/// }
/// ```
///
/// The `auxiliary_signals` block is simulated data regenerated per request.
///
/// # Errors
///
/// Returns 400 Bad Request when the URL is missing, malformed, non-HTTP(S),
/// or has no host. A failed registration lookup is not an error; it appears
/// inline as `registration_info.error`.
pub async fn check_handler(
    State(state): State<AppState>,
    Query(query): Query<CheckQuery>,
) -> Result<Json<ReliabilityReport>, AppError> {
    query.validate()?;

    let evaluation = state.reliability_service.check_url(&query.url).await?;

    let report = ReliabilityReport::assemble(evaluation, SocialSignals::sample());

    Ok(Json(report))
}
