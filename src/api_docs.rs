use utoipa::OpenApi;

use crate::api;

/// OpenAPI document served at /api/docs.
///
/// Endpoints are added here as they get annotated; for the rest, the route
/// table in `api::api_router` is the source of truth.
#[derive(OpenApi)]
#[openapi(
    paths(api::health::health_check),
    tags(
        (name = "bibliotek", description = "Library management API")
    )
)]
pub struct ApiDoc;
