use crate::handlers::resource::{self, COMMITS};
use crate::handlers::AppState;
use crate::models::commit::NewCommit;
use crate::models::document::{Document, MessageResponse};
use crate::utils::errors::ApiError;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use log::debug;

pub async fn list_repository_commits(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let commits =
        resource::list_for_repository(data.store(), COMMITS.collection, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(commits))
}

pub async fn create_commit(
    body: web::Json<Document>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let commit = NewCommit::from_body(body.into_inner())
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
        .into_document(Utc::now())
        .ok_or_else(|| ApiError::BadRequest("Invalid createdAt".to_string()))?;
    debug!("Recording commit {:?}", commit.get(COMMITS.key));

    let stored = resource::create(data.store(), COMMITS.collection, commit).await?;
    Ok(HttpResponse::Created().json(stored))
}

pub async fn delete_commit(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    resource::delete(data.store(), &COMMITS, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Commit deleted successfully")))
}
