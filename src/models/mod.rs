mod auth;
mod task;
mod user;

pub use auth::{Claims, LoginRequest, TokenResponse};
pub use task::{seed_tasks, Task};
pub use user::{seed_users, User};
