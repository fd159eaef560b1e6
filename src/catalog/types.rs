use serde::{Deserialize, Serialize};

/// A stored joke record.
///
/// `id` is minted by the store at insert and never reassigned. `score` is the
/// ranking weight used by the funniest query; higher ranks first, ties are
/// allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub score: i64,
}

/// A joke as submitted for creation: no id yet, score optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewJoke {
    #[serde(default)]
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub score: i64,
}

impl NewJoke {
    /// Creation rule: the body must not be empty or whitespace-only.
    /// Updates are deliberately not run through this check; the mutation
    /// path's contract is narrower.
    pub fn validate(&self) -> Result<(), String> {
        if self.body.trim().is_empty() {
            return Err("joke body must not be empty".to_string());
        }
        Ok(())
    }
}

/// A registered user. Peripheral to the catalog core: stored for contract
/// completeness, with no session or credential verification logic attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// A user as submitted for registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// Response shape of the text search endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<Joke>,
}

/// Response shape of the update endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub id: String,
    pub updated: bool,
}

/// Registration response; credential material is not echoed back.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Error envelope returned by the HTTP adapter.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub description: String,
}
