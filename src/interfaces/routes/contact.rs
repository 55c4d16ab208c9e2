use actix_web::web;

use crate::handlers::{contact, json_error};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/contact")
            .route(web::post().to(contact::submit_contact))
            .default_service(web::route().to(json_error::method_not_allowed)),
    );

    cfg.service(
        web::resource("/contact/resend")
            .route(web::post().to(contact::resend_contact))
            .default_service(web::route().to(json_error::method_not_allowed)),
    );
}
