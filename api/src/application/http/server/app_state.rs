use std::sync::Arc;

use leafdoc_core::application::LeafdocService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: LeafdocService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: LeafdocService) -> Self {
        Self { args, service }
    }
}
