use super::handlers::get_categories::{__path_get_categories, get_categories};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_categories))]
pub struct CategoryApiDoc;

pub fn category_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/categories", state.args.server.root_path),
        get(get_categories),
    )
}
