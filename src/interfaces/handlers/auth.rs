use actix_web::{get, post, web, HttpResponse, ResponseError};
use tracing::instrument;

use crate::entities::user::LoginRequest;
use crate::errors::AppError;
use crate::use_cases::extractors::{AuthClaims, BearerToken};
use crate::AppState;

#[post("/login")]
#[instrument(skip(state, body), fields(username = %body.username))]
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> HttpResponse {
    match state.auth_handler.login(body.into_inner()).await {
        Ok(auth_response) => HttpResponse::Ok().json(auth_response),
        Err(e) => e.error_response(),
    }
}

#[post("/logout")]
#[instrument(skip_all)]
pub async fn logout(
    state: web::Data<AppState>,
    token: BearerToken,
) -> HttpResponse {
    match state.auth_handler.logout(&token.0) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({"message": "Logged out successfully"})),
        Err(e) => e.error_response(),
    }
}

#[get("/me")]
#[instrument(skip_all)]
pub async fn me(
    claims: AuthClaims,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user = state.auth_handler.current_user(&claims.0).await?;
    Ok(HttpResponse::Ok().json(user))
}
