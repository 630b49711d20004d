use actix_web::HttpResponse;
use thiserror::Error;

/// Request-level error taxonomy. Validation and business failures carry the
/// message shown to the caller; `Internal` carries detail that is only
/// logged, never exposed.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    OutOfStock(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<diesel::result::Error> for AppError {
    fn from(e: diesel::result::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(e: r2d2::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(serde_json::json!({
                "error": msg
            })),
            AppError::OutOfStock(msg) => HttpResponse::Conflict().json(serde_json::json!({
                "error": msg
            })),
            AppError::Internal(detail) => {
                log::error!("order placement failed: {}", detail);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "failed to place the order"
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn validation_returns_400() {
        let resp = AppError::Validation("customer id is empty or invalid".to_string())
            .error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_returns_404() {
        let resp = AppError::NotFound("customer C404 does not exist".to_string()).error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn out_of_stock_returns_409() {
        let resp = AppError::OutOfStock("not enough stock for item I001".to_string())
            .error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("connection reset".to_string());
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_display_is_the_rule_message() {
        let err = AppError::Validation("order details are empty or missing".to_string());
        assert_eq!(err.to_string(), "order details are empty or missing");
    }

    #[test]
    fn internal_display_carries_detail() {
        let err = AppError::Internal("msg".to_string());
        assert_eq!(err.to_string(), "Internal error: msg");
    }

    #[test]
    fn diesel_not_found_maps_to_internal() {
        let err: AppError = diesel::result::Error::NotFound.into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
