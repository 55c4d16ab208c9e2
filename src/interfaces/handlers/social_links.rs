use actix_web::{Either, HttpResponse, web};

use crate::{
    AppState, entities::social_links::SocialLinksForm, errors::AppError,
    use_cases::extractors::AdminToken,
};

pub async fn get_social_links(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let links = state.social_handler.get_links().await?;

    Ok(HttpResponse::Ok().json(links))
}

/// Token-guarded upsert of the singleton. Fields missing from the body are
/// written back as empty strings, mirroring the read shape.
pub async fn set_social_links(
    _token: AdminToken,
    state: web::Data<AppState>,
    body: Result<Either<web::Json<SocialLinksForm>, web::Form<SocialLinksForm>>, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let form = match body {
        Ok(Either::Left(json)) => json.into_inner(),
        Ok(Either::Right(form)) => form.into_inner(),
        Err(_) => SocialLinksForm::default(),
    };

    state.social_handler.set_links(form).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({"ok": true})))
}
