use crate::handlers::resource::{self, ISSUES};
use crate::handlers::AppState;
use crate::models::document::{is_truthy, Document, MessageResponse};
use crate::utils::errors::ApiError;
use actix_web::{web, HttpResponse};
use log::info;

pub async fn list_repository_issues(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let issues =
        resource::list_for_repository(data.store(), ISSUES.collection, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(issues))
}

pub async fn create_issue(
    body: web::Json<Document>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    resource::require_key(&body, &ISSUES)?;

    let issue = resource::create(data.store(), ISSUES.collection, body).await?;
    info!("Created issue {}", issue[ISSUES.key]);
    Ok(HttpResponse::Created().json(issue))
}

/// Only `status` is written, whatever else the body holds. Any truthy value
/// is accepted; there are no transition rules.
pub async fn update_issue_status(
    path: web::Path<String>,
    body: web::Json<Document>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let status = body
        .get("status")
        .filter(|s| is_truthy(s))
        .cloned()
        .ok_or_else(|| ApiError::BadRequest("Status is required".to_string()))?;

    let mut patch = Document::new();
    patch.insert("status".to_string(), status);

    let outcome = resource::update(data.store(), &ISSUES, path.into_inner(), patch).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::with_count(
        "Issue status updated successfully",
        outcome.modified,
    )))
}

pub async fn delete_issue(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    resource::delete(data.store(), &ISSUES, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Issue deleted successfully")))
}
