use crate::handlers::resource::{REPOSITORIES, REPO_REF};
use crate::handlers::AppState;
use crate::models::document::{Collection, Document, IDENTITY_FIELD};
use crate::utils::errors::ApiError;
use actix_web::{web, HttpResponse};
use log::info;
use serde_json::Value;

async fn record_for_repository(
    data: &AppState,
    collection: Collection,
    counter_field: &str,
    body: Document,
) -> Result<HttpResponse, ApiError> {
    let mut response = body.clone();
    let id = data
        .store()
        .record_and_increment(collection, body, REPOSITORIES.collection, REPO_REF, counter_field)
        .await?;

    info!("Recorded {} {} for repository {:?}", collection, id, response.get(REPO_REF));
    response.insert(IDENTITY_FIELD.to_string(), Value::String(id));
    Ok(HttpResponse::Created().json(response))
}

pub async fn create_fork(
    body: web::Json<Document>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    record_for_repository(&data, Collection::Forks, "forks", body.into_inner()).await
}

pub async fn create_star(
    body: web::Json<Document>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    record_for_repository(&data, Collection::Stars, "stars", body.into_inner()).await
}
