use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String, // mock fixture data, compared as plaintext
}

// The credential table is a fixed set baked in at startup; there is no
// registration, mutation, or deletion.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            username: "user1".to_string(),
            password: "password1".to_string(),
        },
        User {
            id: 2,
            username: "user2".to_string(),
            password: "password2".to_string(),
        },
        User {
            id: 3,
            username: "user3".to_string(),
            password: "password3".to_string(),
        },
    ]
}
