use actix_web::{web, HttpRequest, HttpResponse};
use tracing::instrument;

use crate::{
    entities::contact_message::{ContactStatusUpdate, NewContactMessageRequest},
    errors::AppError,
    use_cases::extractors::AdminClaims,
    utils::get_client_ip::get_client_ip,
    AppState,
};

/// Counts the submission against the sender's IP and email. Both must be
/// under the limit, and a rejected submission counts against neither.
fn check_contact_rate(state: &AppState, req: &HttpRequest, email: &str) -> Result<(), AppError> {
    let ip = get_client_ip(req, state.trust_x_forwarded_for);
    let ip_key = format!("contact:ip:{}", ip);

    // Normalize to lower case and URL-encode so the key stays unambiguous
    let email_norm = email.trim().to_lowercase();
    let email_key = format!("contact:email:{}", urlencoding::encode(&email_norm));

    state
        .contact_limiter
        .check_all(&[ip_key.as_str(), email_key.as_str()])
        .map_err(|retry_after| {
            tracing::warn!(%ip, "Contact submission rate limited");
            AppError::RateLimited { retry_after }
        })
}

#[instrument(skip(state, req, body))]
pub async fn submit_contact_message(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<NewContactMessageRequest>,
) -> Result<HttpResponse, AppError> {
    check_contact_rate(&state, &req, &body.email)?;

    let response = state
        .contact_handler
        .submit_contact_message(body.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_claims, state))]
pub async fn list_contact_messages(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let list = state.contact_handler.list_contact_messages().await?;
    Ok(HttpResponse::Ok().json(list))
}

#[instrument(skip(_claims, state))]
pub async fn get_contact_message(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let message = state.contact_handler.get_contact_message(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(message))
}

#[instrument(skip(_claims, state, body))]
pub async fn update_contact_status(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
    body: web::Json<ContactStatusUpdate>,
) -> Result<HttpResponse, AppError> {
    let message = state
        .contact_handler
        .update_contact_status(id.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(message))
}

#[instrument(skip(_claims, state))]
pub async fn delete_contact_message(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.contact_handler.delete_contact_message(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
