use crate::catalog::Catalog;
use crate::error::{ApiError, ApiResult};
use crate::extract::FilterExtractor;
use crate::models::{HealthResponse, SearchFilters, TextSearchRequest, TextSearchResponse};
use actix_web::{web, HttpResponse, Responder};

/// Shared, read-only state handed to every handler.
pub struct AppState {
    pub catalog: Catalog,
    pub extractor: Box<dyn FilterExtractor>,
}

impl AppState {
    pub fn new(catalog: Catalog, extractor: impl FilterExtractor + 'static) -> Self {
        AppState {
            catalog,
            extractor: Box::new(extractor),
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into());

    cfg.app_data(json_config)
        .route("/api/health", web::get().to(health))
        .route("/api/get/products", web::get().to(get_products))
        .route("/api/get/products/{id}", web::get().to(get_product))
        .route("/api/search", web::post().to(search))
        .route("/api/search/text", web::post().to(search_text));
}

async fn health(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        products: data.catalog.len(),
    })
}

async fn get_products(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.catalog.all())
}

async fn get_product(data: web::Data<AppState>, id: web::Path<u32>) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    match data.catalog.get(id) {
        Some(product) => Ok(HttpResponse::Ok().json(product)),
        None => Err(ApiError::NotFound(id)),
    }
}

async fn search(data: web::Data<AppState>, filters: web::Json<SearchFilters>) -> impl Responder {
    let result = data.catalog.search(&filters);
    tracing::info!(
        matches = result.products.len(),
        fallback = result.is_fallback,
        "search served"
    );
    HttpResponse::Ok().json(result)
}

async fn search_text(
    data: web::Data<AppState>,
    req: web::Json<TextSearchRequest>,
) -> ApiResult<HttpResponse> {
    let transcript = req.into_inner().text.trim().to_string();

    let filters = data.extractor.extract(&transcript).await.map_err(|err| {
        tracing::warn!(error = %err, "filter extraction failed");
        ApiError::from(err)
    })?;

    let result = data.catalog.search(&filters);
    tracing::info!(
        matches = result.products.len(),
        fallback = result.is_fallback,
        "text search served"
    );

    Ok(HttpResponse::Ok().json(TextSearchResponse {
        transcript,
        filters,
        result,
    }))
}
