use super::handlers::get_shopping_history::{__path_get_shopping_history, get_shopping_history};
use super::handlers::get_user::{__path_get_user, get_user};
use super::handlers::get_wishlist::{__path_get_wishlist, get_wishlist};
use super::handlers::search_users::{__path_search_users, search_users};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_users, get_user, get_wishlist, get_shopping_history))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users", state.args.server.root_path),
            get(search_users),
        )
        .route(
            &format!("{}/users/{{user_id}}", state.args.server.root_path),
            get(get_user),
        )
        .route(
            &format!("{}/users/{{user_id}}/wishlist", state.args.server.root_path),
            get(get_wishlist),
        )
        .route(
            &format!("{}/users/{{user_id}}/orders", state.args.server.root_path),
            get(get_shopping_history),
        )
}
