use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::{
    entities::skill::{NewSkillRequest, UpdateSkillRequest},
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_skills(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let skills = state.skill_handler.list_skills().await?;
    Ok(HttpResponse::Ok().json(&*skills))
}

#[instrument(skip(state))]
pub async fn get_skill(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let skill = state.skill_handler.get_skill(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(skill))
}

#[instrument(skip(_claims, state, body))]
pub async fn create_skill(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    body: web::Json<NewSkillRequest>,
) -> Result<HttpResponse, AppError> {
    let skill = state.skill_handler.create_skill(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(skill))
}

#[instrument(skip(_claims, state, body))]
pub async fn update_skill(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
    body: web::Json<UpdateSkillRequest>,
) -> Result<HttpResponse, AppError> {
    let skill = state
        .skill_handler
        .update_skill(id.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(skill))
}

#[instrument(skip(_claims, state))]
pub async fn delete_skill(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.skill_handler.delete_skill(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
