use actix_web::{Either, HttpResponse, web};
use serde::Deserialize;

use crate::{
    AppState, entities::contact_message::ContactForm, errors::AppError,
    use_cases::extractors::AdminToken,
};

/// Accepts the submission as JSON or an URL-encoded form. A body that fails
/// to parse degrades to an empty form, so the caller still gets the
/// field-keyed 400 instead of a generic parse error.
pub async fn submit_contact(
    state: web::Data<AppState>,
    body: Result<Either<web::Json<ContactForm>, web::Form<ContactForm>>, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let form = match body {
        Ok(Either::Left(json)) => json.into_inner(),
        Ok(Either::Right(form)) => form.into_inner(),
        Err(_) => ContactForm::default(),
    };

    state.contact_handler.submit(form).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({"ok": true})))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResendRequest {
    /// Messages to replay; omitted means every stored message.
    pub ids: Option<Vec<i64>>,
}

/// Operator-facing bulk resend. Reports only the count of successful sends.
pub async fn resend_contact(
    _token: AdminToken,
    state: web::Data<AppState>,
    body: Result<web::Json<ResendRequest>, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let request = match body {
        Ok(json) => json.into_inner(),
        Err(_) => ResendRequest::default(),
    };

    let sent = state.contact_handler.resend(request.ids).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({"sent": sent})))
}
