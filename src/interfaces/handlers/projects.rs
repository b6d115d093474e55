use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::{
    entities::project::{NewProjectRequest, UpdateProjectRequest},
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_projects(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let projects = state.project_handler.list_projects().await?;
    Ok(HttpResponse::Ok().json(&*projects))
}

#[instrument(skip(state))]
pub async fn get_project(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let project = state.project_handler.get_project(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(_claims, state, body))]
pub async fn create_project(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    body: web::Json<NewProjectRequest>,
) -> Result<HttpResponse, AppError> {
    let project = state.project_handler.create_project(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(project))
}

#[instrument(skip(_claims, state, body))]
pub async fn update_project(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
    body: web::Json<UpdateProjectRequest>,
) -> Result<HttpResponse, AppError> {
    let project = state
        .project_handler
        .update_project(id.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(_claims, state))]
pub async fn delete_project(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.project_handler.delete_project(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
