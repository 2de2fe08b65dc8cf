use crate::application::http::{
    category::router::CategoryApiDoc, health::router::HealthApiDoc,
    product::router::ProductApiDoc, user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API"
    ),
    nest(
        (path = "/products", api = ProductApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/categories", api = CategoryApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
