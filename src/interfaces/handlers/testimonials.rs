use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::{
    entities::testimonial::{NewTestimonialRequest, UpdateTestimonialRequest},
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_testimonials(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let testimonials = state.testimonial_handler.list_testimonials().await?;
    Ok(HttpResponse::Ok().json(&*testimonials))
}

#[instrument(skip(state))]
pub async fn get_testimonial(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let testimonial = state.testimonial_handler.get_testimonial(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(testimonial))
}

#[instrument(skip(_claims, state, body))]
pub async fn create_testimonial(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    body: web::Json<NewTestimonialRequest>,
) -> Result<HttpResponse, AppError> {
    let testimonial = state.testimonial_handler.create_testimonial(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(testimonial))
}

#[instrument(skip(_claims, state, body))]
pub async fn update_testimonial(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
    body: web::Json<UpdateTestimonialRequest>,
) -> Result<HttpResponse, AppError> {
    let testimonial = state
        .testimonial_handler
        .update_testimonial(id.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(testimonial))
}

#[instrument(skip(_claims, state))]
pub async fn delete_testimonial(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.testimonial_handler.delete_testimonial(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
