use utoipa::OpenApi;

use crate::application::http::{
    analysis::handlers::{
        analyze_image::__path_analyze_image, analyze_upload::__path_analyze_upload,
        get_analysis_history::__path_get_analysis_history, save_analysis::__path_save_analysis,
    },
    health::__path_health,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leafdoc API",
        description = "Leaf disease diagnosis with upstream response normalization"
    ),
    paths(
        analyze_image,
        analyze_upload,
        save_analysis,
        get_analysis_history,
        health
    )
)]
pub struct ApiDoc;
