use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::movies::upstream_diagnostic,
        api::movies::popular,
        api::movies::search,
        api::movies::details_by_title,
        api::movies::now_playing,
        api::movies::by_genre,
        api::movies::credits_by_title,
    ),
    tags(
        (name = "cinegate", description = "Movie metadata gateway API")
    )
)]
pub struct ApiDoc;
