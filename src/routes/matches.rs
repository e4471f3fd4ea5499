use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{calculate_match_score_with_weights, get_match_quality, Matcher};
use crate::models::{
    ErrorResponse, FilterSponsorsRequest, FilterSponsorsResponse, HealthResponse, QualityQuery,
    QualityResponse, ScoreMatchRequest, ScoreMatchResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_match))
        .route("/matches/sponsors", web::post().to(filter_sponsors))
        .route("/matches/quality", web::get().to(match_quality));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score one event against one sponsor
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "event": {"category": "hackathon", "location": "San Francisco, CA", "audienceSize": 500},
///   "sponsor": {
///     "budgetRange": {"min": 50000, "max": 150000},
///     "location": "San Francisco, CA",
///     "preferences": {"categories": ["hackathon"], "audienceSize": {"min": 200, "max": 1000}}
///   }
/// }
/// ```
async fn score_match(
    state: web::Data<AppState>,
    req: web::Json<ScoreMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for score request: {}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let result = calculate_match_score_with_weights(&req.event, &req.sponsor, state.matcher.weights());

    tracing::info!(
        "Scored event {:?} against sponsor {:?}: {}",
        req.event.id,
        req.sponsor.id,
        result.score
    );

    HttpResponse::Ok().json(ScoreMatchResponse {
        score: result.score,
        breakdown: result.breakdown,
        quality: get_match_quality(result.score),
    })
}

/// Rank sponsors for an event
///
/// POST /api/v1/matches/sponsors
///
/// Request body:
/// ```json
/// {
///   "event": {...},
///   "sponsors": [{...}],
///   "minScore": 50,
///   "limit": 20
/// }
/// ```
async fn filter_sponsors(
    state: web::Data<AppState>,
    req: web::Json<FilterSponsorsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for sponsor ranking request: {}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    if req.sponsors.len() > state.matching.max_sponsors {
        tracing::warn!(
            "Rejected sponsor ranking with {} candidates (max {})",
            req.sponsors.len(),
            state.matching.max_sponsors
        );
        return bad_request(
            "Too many sponsors",
            format!("at most {} sponsors can be ranked per request", state.matching.max_sponsors),
        );
    }

    let min_score = req.min_score.unwrap_or(state.matching.default_min_score);
    let limit = req.limit.map(usize::from);

    let ranking = state.matcher.filter_sponsors(&req.event, &req.sponsors, min_score, limit);

    tracing::info!(
        "Ranked sponsors for event {:?}: {} of {} at or above {}",
        req.event.id,
        ranking.matches.len(),
        ranking.total_candidates,
        min_score
    );

    HttpResponse::Ok().json(FilterSponsorsResponse {
        matches: ranking.matches,
        total_candidates: ranking.total_candidates,
    })
}

/// Quality label for a score
///
/// GET /api/v1/matches/quality?score={score}
async fn match_quality(query: web::Query<QualityQuery>) -> impl Responder {
    if let Err(errors) = query.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    HttpResponse::Ok().json(QualityResponse {
        score: query.score,
        quality: get_match_quality(query.score),
    })
}
