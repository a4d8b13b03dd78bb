use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{classify, Matcher};
use crate::models::{
    ErrorResponse, HealthResponse, MatchResponse, QuizAnswers, SaveResultsRequest,
    SaveResultsResponse, SavedResult, SubscriptionStatus,
};
use crate::services::{CacheKey, CacheManager, CatalogClient, KitClient, PostgresClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
    pub cache: Arc<CacheManager>,
    pub postgres: Arc<PostgresClient>,
    /// None when no Kit API key is configured; saves then report
    /// `subscription: skipped`.
    pub kit: Option<Arc<KitClient>>,
    pub matcher: Matcher,
    pub public_base_url: String,
}

/// Configure all quiz-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/quiz/match", web::post().to(match_projects))
        .route("/results", web::post().to(save_results))
        .route("/results/{unique_id}", web::get().to(get_result));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    // Check PostgreSQL health
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match quiz answers against the catalog
///
/// POST /api/v1/quiz/match
///
/// Request body:
/// ```json
/// {
///   "projectTypes": ["gifts"],
///   "mood": "quick",
///   "machines": ["accuquilt"]
/// }
/// ```
///
/// Catalog unavailability is reported as a 503, never as an empty match
/// list; zero genuine matches and an unreachable catalog are different
/// outcomes.
async fn match_projects(
    state: web::Data<AppState>,
    req: web::Json<QuizAnswers>,
) -> impl Responder {
    let answers = req.into_inner();

    tracing::info!(
        "Matching quiz answers: {} project types, mood {:?}, {} machines",
        answers.project_types.len(),
        answers.mood,
        answers.machines.len()
    );

    let catalog = match state.catalog.list_projects().await {
        Ok(projects) => projects,
        Err(e) => {
            tracing::error!("Failed to fetch catalog: {}", e);
            return HttpResponse::ServiceUnavailable().json(ErrorResponse {
                error: "catalog_unavailable".to_string(),
                message: "The project catalog could not be reached".to_string(),
                status_code: 503,
            });
        }
    };

    let result = state.matcher.find_matches(&answers, catalog);
    let crafter_type = classify(answers.mood);

    tracing::info!(
        "Returning {} matches (from {} candidates)",
        result.matches.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(MatchResponse {
        matches: result.matches,
        crafter_type,
        total_candidates: result.total_candidates,
    })
}

/// Save a quiz outcome under a shareable identifier
///
/// POST /api/v1/results
///
/// The mailing-list subscription that follows a successful save is
/// best-effort; its outcome is reported in the `subscription` field and
/// never turns a committed save into a failure.
async fn save_results(
    state: web::Data<AppState>,
    req: web::Json<SaveResultsRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for save_results request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let unique_id = match state
        .postgres
        .save_result(
            &req.email,
            req.first_name.as_deref(),
            &req.quiz_answers,
            &req.matched_projects,
            &req.crafter_type,
        )
        .await
    {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to save results: {}", e);
            return HttpResponse::ServiceUnavailable().json(ErrorResponse {
                error: "store_unavailable".to_string(),
                message: "Results could not be saved".to_string(),
                status_code: 503,
            });
        }
    };

    let subscription = match &state.kit {
        Some(kit) => {
            let tags = vec![req.crafter_type.tag()];
            match kit
                .subscribe(&req.email, req.first_name.as_deref(), &tags)
                .await
            {
                Ok(()) => SubscriptionStatus::Subscribed,
                Err(e) => {
                    tracing::warn!("Kit subscription failed for saved result {}: {}", unique_id, e);
                    SubscriptionStatus::Failed
                }
            }
        }
        None => SubscriptionStatus::Skipped,
    };

    let results_url = format!(
        "{}/results/{}",
        state.public_base_url.trim_end_matches('/'),
        unique_id
    );

    tracing::info!("Saved results under {} ({:?})", unique_id, subscription);

    HttpResponse::Ok().json(SaveResultsResponse {
        success: true,
        unique_id,
        results_url,
        subscription,
    })
}

/// Fetch a previously saved result
///
/// GET /api/v1/results/{unique_id}
///
/// Read-only and idempotent. Saved results never change, so cache hits
/// are always authoritative.
async fn get_result(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let unique_id = path.into_inner();
    let cache_key = CacheKey::result(&unique_id);

    if let Ok(cached) = state.cache.get::<SavedResult>(&cache_key).await {
        return HttpResponse::Ok().json(cached);
    }

    match state.postgres.get_result(&unique_id).await {
        Ok(Some(result)) => {
            if let Err(e) = state.cache.set(&cache_key, &result).await {
                tracing::warn!("Failed to cache result {}: {}", unique_id, e);
            }

            HttpResponse::Ok().json(result)
        }
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "results_not_found".to_string(),
            message: "We couldn't find these results. The link may be invalid or expired."
                .to_string(),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch result {}: {}", unique_id, e);
            HttpResponse::ServiceUnavailable().json(ErrorResponse {
                error: "store_unavailable".to_string(),
                message: "Saved results could not be read".to_string(),
                status_code: 503,
            })
        }
    }
}
