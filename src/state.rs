//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{RedirectDispatcher, ShortenService};
use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::CodeGenerator;

#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub redirect_dispatcher: Arc<RedirectDispatcher>,
    pub repository: Arc<dyn LinkRepository>,
}

impl AppState {
    /// Wires the services over one store and one code generator.
    pub fn new(
        config: &Config,
        repository: Arc<dyn LinkRepository>,
        generator: Arc<dyn CodeGenerator>,
    ) -> Self {
        let shorten_service = ShortenService::new(repository.clone(), generator, &config.base_url)
            .with_normalization(config.normalize_urls)
            .with_max_attempts(config.code_max_attempts);

        let redirect_dispatcher = RedirectDispatcher::new(repository.clone(), config.redirect_kind);

        Self {
            shorten_service: Arc::new(shorten_service),
            redirect_dispatcher: Arc::new(redirect_dispatcher),
            repository,
        }
    }
}
