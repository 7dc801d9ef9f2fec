use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

/// Raised while building a catalog. Loading stops at the first bad record.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate product id {0}")]
    DuplicateId(u32),

    #[error("product {id} has no sizes")]
    EmptySizes { id: u32 },

    #[error("product {id} has invalid size {size}")]
    InvalidSize { id: u32, size: f64 },

    #[error("product {id} has invalid price {price}")]
    InvalidPrice { id: u32, price: f64 },

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("query text is empty")]
    EmptyQuery,

    #[error("extraction service unavailable: {0}")]
    Unavailable(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Product {0} not found")]
    NotFound(u32),

    #[error("Could not understand your request. Please try rephrasing.")]
    Extraction(#[from] ExtractionError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Extraction(_) => "EXTRACTION_FAILED",
            ApiError::BadRequest(_) => "BAD_REQUEST",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        }))
    }
}
