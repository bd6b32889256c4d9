use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/catalog", catalog_routes())
        .nest("/uploads", upload_routes())
        .nest("/media", media_routes())
        .nest("/try-on", tryon_routes())
}

fn catalog_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::catalog::get_catalog))
        .routes(routes!(handlers::catalog::get_product))
}

fn upload_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::upload::create_upload))
        .routes(routes!(handlers::upload::delete_upload))
        .layer(handlers::upload::upload_body_limit())
}

fn media_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::media::serve_media))
}

fn tryon_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::tryon::try_on))
}
