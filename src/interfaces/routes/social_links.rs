use actix_web::web;

use crate::handlers::{json_error, social_links};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/social-links")
            .route(web::get().to(social_links::get_social_links))
            .route(web::post().to(social_links::set_social_links))
            .default_service(web::route().to(json_error::method_not_allowed)),
    );
}
