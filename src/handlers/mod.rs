pub mod commits;
pub mod issues;
pub mod pull_requests;
pub mod repositories;
pub mod resource;
pub mod social;
pub mod users;


use crate::services::store::DocumentStore;
use crate::utils::errors::ApiError;
use actix_web::{web, HttpResponse};
use log::warn;
use std::sync::Arc;

pub struct AppState {
    store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "codehub-api"
    }))
}

/// Malformed or non-object bodies get the same `{"error": ...}` shape as
/// every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected request body: {}", err);
        ApiError::BadRequest(err.to_string()).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health_check))
        .service(
            web::resource("/users")
                .route(web::get().to(users::list_users))
                .route(web::post().to(users::create_user)),
        )
        .service(
            web::resource("/users/{user_id}")
                .route(web::get().to(users::get_user))
                .route(web::patch().to(users::update_user))
                .route(web::delete().to(users::delete_user)),
        )
        .service(
            web::resource("/repositories")
                .route(web::get().to(repositories::list_repositories))
                .route(web::post().to(repositories::create_repository)),
        )
        .service(
            web::resource("/repositories/{repo_id}")
                .route(web::get().to(repositories::get_repository))
                .route(web::patch().to(repositories::update_repository))
                .route(web::delete().to(repositories::delete_repository)),
        )
        .route(
            "/repositories/{repo_id}/issues",
            web::get().to(issues::list_repository_issues),
        )
        .route(
            "/repositories/{repo_id}/pull-requests",
            web::get().to(pull_requests::list_repository_pull_requests),
        )
        .route(
            "/repositories/{repo_id}/commits",
            web::get().to(commits::list_repository_commits),
        )
        .route("/issues", web::post().to(issues::create_issue))
        .route("/issues/{issue_id}", web::delete().to(issues::delete_issue))
        .route(
            "/issues/{issue_id}/status",
            web::patch().to(issues::update_issue_status),
        )
        .route("/pull-requests", web::post().to(pull_requests::create_pull_request))
        .route(
            "/pull-requests/{pr_id}",
            web::delete().to(pull_requests::delete_pull_request),
        )
        .route("/commits", web::post().to(commits::create_commit))
        .route("/commits/{commit_id}", web::delete().to(commits::delete_commit))
        .route("/forks", web::post().to(social::create_fork))
        .route("/stars", web::post().to(social::create_star));
}
