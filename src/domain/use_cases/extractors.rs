use actix_web::{FromRequest, HttpRequest, web};
use futures_util::future::{Ready, ready};

use crate::{AppState, errors::AppError};

pub const ADMIN_TOKEN_HEADER: &str = "X-Admin-Token";

/// Extractor guarding write endpoints behind the shared admin secret.
///
/// Rejects with 401 when the header is missing, wrong, or when no secret is
/// configured on the server at all.
/// Usage: add `_token: AdminToken` as a parameter to your handler function.
#[derive(Debug)]
pub struct AdminToken;

impl FromRequest for AdminToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let presented = req
            .headers()
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok());

        let expected = req
            .app_data::<web::Data<AppState>>()
            .and_then(|state| state.config.social_admin_token.as_deref());

        match (expected, presented) {
            (Some(expected), Some(token)) if !expected.is_empty() && token == expected => {
                ready(Ok(AdminToken))
            }
            _ => ready(Err(AppError::Unauthorized.into())),
        }
    }
}
