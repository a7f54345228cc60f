use std::sync::Arc;

use crate::models::User;

// Read-only credential table shared across request handlers. The table is
// seeded once at startup and never mutated, so clones are cheap and no
// locking is involved.
#[derive(Clone)]
pub struct UserDirectory {
    users: Arc<Vec<User>>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(users),
        }
    }

    // Single place where credentials are checked: lookup by username, then
    // password comparison. Plaintext equality is intentional, the table is
    // mock fixture data.
    pub fn verify_credentials(&self, username: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|user| user.username == username)
            .filter(|user| user.password == password)
    }

    pub fn find_by_id(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }
}
