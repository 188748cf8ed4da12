use crate::{config::Config, infrastructure::repositories::joya_repository::JoyaRepository};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub joya_repo: Arc<JoyaRepository>,
    pub config: Config,
}

impl AppState {
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            joya_repo: Arc::new(JoyaRepository::new(db)),
            config,
        }
    }
}
