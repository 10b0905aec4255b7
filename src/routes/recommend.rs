use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{match_percentage, rank};
use crate::models::{
    ErrorResponse, HealthResponse, PreferenceVector, RecommendRequest, RecommendResponse,
    ScoredBean,
};
use crate::services::{CatalogStore, QuestionStore};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub questions: Arc<QuestionStore>,
    pub limits: RecommendLimits,
}

/// Result-list limits from configuration
#[derive(Debug, Clone, Copy)]
pub struct RecommendLimits {
    pub default: usize,
    pub max: usize,
}

/// Configure recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.questions.active().is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommendation endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "answers": { "likesAcidity": true, "likesFullBody": false, ... },
///   "limit": 3
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Answers must cover every survey dimension, no silent defaulting
    let prefs = match PreferenceVector::from_answers(&req.answers) {
        Ok(prefs) => prefs,
        Err(e) => {
            tracing::info!("Rejected preference answers: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid preference answers".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    let limit = req
        .limit
        .unwrap_or(state.limits.default)
        .min(state.limits.max);

    let catalog = state.catalog.all();
    let total_beans = catalog.len();

    tracing::info!("Ranking {} beans, limit: {}", total_beans, limit);

    let recommendations = match rank(&catalog, &prefs, limit) {
        Ok(recommendations) => recommendations,
        Err(e) => {
            tracing::info!("Rejected recommendation request: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid limit".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    let response = RecommendResponse {
        recommendations: recommendations
            .into_iter()
            .map(|r| ScoredBean {
                match_percent: match_percentage(r.score),
                bean: r.bean,
                score: r.score,
                match_reasons: r.match_reasons,
            })
            .collect(),
        total_beans,
    };

    tracing::info!(
        "Returning {} recommendations (from {} beans)",
        response.recommendations.len(),
        total_beans
    );

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
