use std::sync::Arc;

use crate::config::Config;
use crate::models::{seed_tasks, seed_users, Task};
use crate::services::{TokenService, UserDirectory};

// Application state shared between handlers. Everything inside is immutable
// after startup, so clones are cheap and no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub users: UserDirectory,
    pub tasks: Arc<Vec<Task>>,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let users = UserDirectory::new(seed_users());
        let tasks = Arc::new(seed_tasks(&config.server.base_url()));
        let tokens = TokenService::new(&config.auth.secret, config.auth.token_ttl_minutes);

        Self {
            config,
            users,
            tasks,
            tokens,
        }
    }
}
