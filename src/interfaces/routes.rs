use actix_web::web;

use crate::handlers::{home::home, json_error};

mod contact;
mod docs;
mod projects;
mod social_links;

/// Full route table. `api_prefix` is configuration-supplied (default
/// `/api`); everything except the home route lives under it.
pub fn configure_routes(cfg: &mut web::ServiceConfig, api_prefix: &str) {
    cfg.service(home);

    cfg.service(
        web::scope(api_prefix)
            .configure(projects::config_routes)
            .configure(contact::config_routes)
            .configure(social_links::config_routes)
            .configure(docs::config_routes),
    );

    cfg.default_service(web::route().to(json_error::not_found));
}
