use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::RecommendationSettings;
use crate::core::Recommender;
use crate::models::{ErrorResponse, HealthResponse, RecommendationRequest, RecommendationResponse};
use crate::services::CatalogStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogStore,
    pub recommender: Recommender,
    pub limits: RecommendationSettings,
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/catalog", web::get().to(get_catalog))
        .route("/catalog/{id}", web::get().to(get_product))
        .route("/recommendations", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        catalog_size: state.catalog.len(),
    })
}

/// Raw catalog, unscored
///
/// GET /api/v1/catalog
async fn get_catalog(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.products())
}

/// Single catalog product by id
///
/// GET /api/v1/catalog/{id}
async fn get_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    match state.catalog.get(&id) {
        Some(product) => HttpResponse::Ok().json(product),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Product not found".to_string(),
            message: format!("No product with id {}", id),
            status_code: 404,
        }),
    }
}

/// Ranked recommendations endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "profile": {
///     "bestColors": ["Navy", "Olive"],
///     "bodyType": "Slim build",
///     "skinTone": "Fair"
///   },
///   "limit": 5
/// }
/// ```
///
/// `profile` may be omitted or `null` before the user has been analyzed; the
/// products then carry placeholder scores and `personalized` is false.
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendations request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let catalog = state.catalog.products();
    let result = state.recommender.recommend(req.profile.as_ref(), catalog);

    let limit = state.limits.effective_limit(req.limit, result.products.len());
    let mut products = result.products;
    products.truncate(limit);

    tracing::info!(
        "Returning {} of {} products (personalized: {})",
        products.len(),
        catalog.len(),
        result.personalized
    );

    HttpResponse::Ok().json(RecommendationResponse {
        products,
        personalized: result.personalized,
        total_products: catalog.len(),
    })
}
