use actix_web::{HttpResponse, http::StatusCode};

pub fn json_error(status: StatusCode, error: &str, details: &str) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({
        "error": error,
        "details": details
    }))
}

/// App-level default service: anything that matched no route.
pub async fn not_found() -> HttpResponse {
    json_error(
        StatusCode::NOT_FOUND,
        "Not found",
        "The requested resource does not exist",
    )
}

/// Resource-level default service for fixed-method endpoints.
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(serde_json::json!({
        "detail": "Method not allowed"
    }))
}
