use actix_web::{HttpResponse, Responder, get};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the Portfolio Web API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "documentation": "/api/swagger.json"
    }))
}
