use crate::handlers::resource::{self, USERS};
use crate::handlers::AppState;
use crate::models::document::{Document, MessageResponse};
use crate::utils::errors::ApiError;
use actix_web::{web, HttpResponse};
use log::info;

pub async fn list_users(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let users = resource::list(data.store(), USERS.collection).await?;
    Ok(HttpResponse::Ok().json(users))
}

pub async fn get_user(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user = resource::get(data.store(), &USERS, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

pub async fn create_user(
    body: web::Json<Document>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user = resource::create(data.store(), USERS.collection, body.into_inner()).await?;
    info!("Created user {:?}", user.get(USERS.key));
    Ok(HttpResponse::Created().json(user))
}

pub async fn update_user(
    path: web::Path<String>,
    body: web::Json<Document>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    resource::update(data.store(), &USERS, path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("User updated successfully")))
}

pub async fn delete_user(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    resource::delete(data.store(), &USERS, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted successfully")))
}
