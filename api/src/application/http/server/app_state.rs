use std::sync::Arc;

use storefront_core::application::StorefrontService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: StorefrontService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: StorefrontService) -> Self {
        Self { args, service }
    }
}
