use actix_web::{HttpRequest, HttpResponse, Responder};

use crate::{handlers::request_base_url, openapi};

pub async fn swagger_json(req: HttpRequest) -> impl Responder {
    let base_url = request_base_url(&req);

    HttpResponse::Ok().json(openapi::schema(&base_url))
}
