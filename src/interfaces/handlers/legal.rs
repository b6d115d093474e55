use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::{
    entities::legal_doc::{LegalDocType, UpdateLegalDocRequest},
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

/// Unknown document types are reported as missing documents.
fn parse_doc_type(raw: &str) -> Result<LegalDocType, AppError> {
    raw.parse::<LegalDocType>().map_err(AppError::NotFound)
}

#[instrument(skip(state))]
pub async fn get_legal_doc(
    state: web::Data<AppState>,
    doc_type: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let doc_type = parse_doc_type(&doc_type)?;
    let doc = state.legal_handler.get_legal_doc(doc_type).await?;
    Ok(HttpResponse::Ok().json(&*doc))
}

#[instrument(skip(_claims, state, body))]
pub async fn update_legal_doc(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    doc_type: web::Path<String>,
    body: web::Json<UpdateLegalDocRequest>,
) -> Result<HttpResponse, AppError> {
    let doc_type = parse_doc_type(&doc_type)?;
    let doc = state
        .legal_handler
        .update_legal_doc(doc_type, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(doc))
}
