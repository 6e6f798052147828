use crate::handlers::resource::{self, REPOSITORIES};
use crate::handlers::AppState;
use crate::models::document::{Document, MessageResponse};
use crate::utils::errors::ApiError;
use actix_web::{web, HttpResponse};
use log::info;

pub async fn list_repositories(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let repositories = resource::list(data.store(), REPOSITORIES.collection).await?;
    Ok(HttpResponse::Ok().json(repositories))
}

pub async fn get_repository(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let repository = resource::get(data.store(), &REPOSITORIES, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(repository))
}

/// The response carries the caller's `repoId` and the store's `_id` side by
/// side.
pub async fn create_repository(
    body: web::Json<Document>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    resource::require_key(&body, &REPOSITORIES)?;

    let repository = resource::create(data.store(), REPOSITORIES.collection, body).await?;
    info!("Created repository {}", repository[REPOSITORIES.key]);
    Ok(HttpResponse::Created().json(repository))
}

pub async fn update_repository(
    path: web::Path<String>,
    body: web::Json<Document>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let outcome =
        resource::update(data.store(), &REPOSITORIES, path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::with_count(
        "Repository updated successfully",
        outcome.modified,
    )))
}

pub async fn delete_repository(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    resource::delete(data.store(), &REPOSITORIES, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Repository deleted successfully")))
}
