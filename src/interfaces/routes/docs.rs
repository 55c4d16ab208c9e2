use actix_web::web;

use crate::handlers::docs;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/swagger.json").route(web::get().to(docs::swagger_json)));
}
