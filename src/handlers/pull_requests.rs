use crate::handlers::resource::{self, PULL_REQUESTS};
use crate::handlers::AppState;
use crate::models::document::{Document, MessageResponse};
use crate::utils::errors::ApiError;
use actix_web::{web, HttpResponse};

pub async fn list_repository_pull_requests(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let pull_requests =
        resource::list_for_repository(data.store(), PULL_REQUESTS.collection, path.into_inner())
            .await?;
    Ok(HttpResponse::Ok().json(pull_requests))
}

pub async fn create_pull_request(
    body: web::Json<Document>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let pull_request =
        resource::create(data.store(), PULL_REQUESTS.collection, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(pull_request))
}

pub async fn delete_pull_request(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    resource::delete(data.store(), &PULL_REQUESTS, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Pull request deleted successfully")))
}
