use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::{
    entities::about_info::UpdateAboutInfoRequest,
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

#[instrument(skip(state))]
pub async fn get_about(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let about = state.about_handler.get_about().await?;
    Ok(HttpResponse::Ok().json(&*about))
}

#[instrument(skip(_claims, state, body))]
pub async fn update_about(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    body: web::Json<UpdateAboutInfoRequest>,
) -> Result<HttpResponse, AppError> {
    let about = state.about_handler.update_about(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(about))
}
