use axum::{Router, extract::DefaultBodyLimit, routing::post};

use super::handlers::{
    analyze_image::analyze_image, analyze_upload::analyze_upload,
    get_analysis_history::get_analysis_history, save_analysis::save_analysis,
};
use crate::application::http::server::app_state::AppState;

// Base64 inflates a 10 MB image by a third.
const MAX_BODY_SIZE: usize = 16 * 1024 * 1024;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/analyze", root_path), post(analyze_image))
        .route(&format!("{}/analyze/upload", root_path), post(analyze_upload))
        .route(
            &format!("{}/analyses", root_path),
            post(save_analysis).get(get_analysis_history),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
}
