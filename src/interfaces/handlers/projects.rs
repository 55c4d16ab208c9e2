use actix_web::{HttpRequest, HttpResponse, web};

use crate::{AppState, errors::AppError, handlers::request_base_url};

pub async fn list_projects(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let base_url = request_base_url(&req);
    let projects = state.project_handler.list_projects(&base_url).await?;

    Ok(HttpResponse::Ok().json(projects))
}

pub async fn get_project(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let base_url = request_base_url(&req);
    let project = state
        .project_handler
        .get_project(path.into_inner(), &base_url)
        .await?;

    Ok(HttpResponse::Ok().json(project))
}
