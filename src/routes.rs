use axum::routing::{get, Router};
use crate::handlers;
use crate::models::UploadKind;

pub fn build_router() -> Router {

    Router::new()
        .route("/", get(handlers::index).post(handlers::index))
        .route(
            UploadKind::RunResult.path(),
            get(handlers::get_not_supported).post(handlers::upload_run_result)
        )
        .route(
            UploadKind::RunData.path(),
            get(handlers::get_not_supported).post(handlers::upload_run_data)
        )

}
