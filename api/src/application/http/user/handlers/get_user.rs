use axum::extract::{Path, State};
use storefront_core::domain::user::{entities::User, ports::UserService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "user",
    summary = "Get user",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = User),
        (status = 404, description = "User not found")
    ),
)]
pub async fn get_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .get_user(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
