#![allow(dead_code)]

use axum_test::TestServer;
use shortener_core::api::routes::app_router;
use shortener_core::application::services::RedirectKind;
use shortener_core::config::Config;
use shortener_core::infrastructure::persistence::MemoryLinkRepository;
use shortener_core::state::AppState;
use shortener_core::utils::code_generator::{CodeStrategy, build_generator};
use std::sync::Arc;

pub const BASE_URL: &str = "http://sho.rt";

pub fn test_config(kind: RedirectKind) -> Config {
    Config {
        base_url: BASE_URL.to_string(),
        redirect_kind: kind,
        ..Config::default()
    }
}

pub fn create_test_state_with(config: &Config) -> AppState {
    let repository = Arc::new(MemoryLinkRepository::new());
    let generator = build_generator(config.code_strategy, config.code_length);
    AppState::new(config, repository, generator)
}

pub fn create_test_state(kind: RedirectKind) -> AppState {
    create_test_state_with(&test_config(kind))
}

pub fn create_alphanumeric_state(length: usize) -> AppState {
    let config = Config {
        code_strategy: CodeStrategy::Alphanumeric,
        code_length: length,
        ..test_config(RedirectKind::Temporary)
    };
    create_test_state_with(&config)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

/// Shortens `url` through the service and returns the issued code.
pub async fn seed_link(state: &AppState, url: &str) -> String {
    state.shorten_service.shorten(url).await.unwrap().code
}
