use super::types::{Joke, NewJoke, NewUser, User};
use crate::error::{CatalogError, StoreError};
use crate::store::JokeStore;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Upper bound on any single store call. A slow or unresponsive store fails
/// the request with `StoreUnavailable` instead of hanging it; no partial
/// results, no retries.
const STORE_TIMEOUT: Duration = Duration::from_secs(10);

/// The catalog service. Translates caller intent into store calls and
/// normalizes the result/error shape the adapter sees.
///
/// Holds no mutable state, so one instance can be shared across any number of
/// concurrent requests.
pub struct CatalogService {
    store: Arc<dyn JokeStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn JokeStore>) -> Self {
        Self { store }
    }

    /// Runs a store call under [`STORE_TIMEOUT`] and classifies its outcome.
    async fn guarded<T>(
        &self,
        call: impl Future<Output = Result<T, StoreError>> + Send,
    ) -> Result<T, CatalogError> {
        match tokio::time::timeout(STORE_TIMEOUT, call).await {
            Ok(outcome) => outcome.map_err(CatalogError::from),
            Err(_) => {
                tracing::warn!("store call exceeded {:?}", STORE_TIMEOUT);
                Err(CatalogError::StoreUnavailable(format!(
                    "store call exceeded {:?}",
                    STORE_TIMEOUT
                )))
            }
        }
    }

    /// Boundary parse of a caller-supplied count. Malformed or negative input
    /// never reaches the store as a limit.
    fn parse_limit(text: &str) -> Result<usize, CatalogError> {
        text.trim().parse::<usize>().map_err(|_| {
            CatalogError::InvalidInput(format!(
                "limit must be a non-negative integer, got {:?}",
                text
            ))
        })
    }

    /// Fetches the joke with the given id, passed through verbatim.
    pub async fn joke_by_id(&self, id: &str) -> Result<Joke, CatalogError> {
        self.guarded(self.store.find_id(id)).await
    }

    /// The highest-score jokes, capped at the parsed limit. Ordering is score
    /// descending with ties broken by id, so repeated calls against unchanged
    /// data return the identical sequence. `"0"` is a valid limit and yields
    /// an empty list.
    pub async fn funniest(&self, limit_text: &str) -> Result<Vec<Joke>, CatalogError> {
        let limit = Self::parse_limit(limit_text)?;
        self.guarded(self.store.funniest(limit)).await
    }

    /// A random sample of jokes, capped at the parsed limit. The store owns
    /// the sampling algorithm; the service does not post-process the draw.
    pub async fn random(&self, limit_text: &str) -> Result<Vec<Joke>, CatalogError> {
        let limit = Self::parse_limit(limit_text)?;
        self.guarded(self.store.random(limit)).await
    }

    /// Indexed text search over title and body. Zero matches is a successful
    /// empty result, uniformly on every call path.
    pub async fn search(&self, query: &str) -> Result<Vec<Joke>, CatalogError> {
        self.guarded(self.store.text_search(query)).await
    }

    /// Validates and stores a new joke. On validation failure the store
    /// receives no insert call.
    pub async fn add(&self, joke: NewJoke) -> Result<Joke, CatalogError> {
        joke.validate().map_err(CatalogError::Validation)?;
        let stored = self.guarded(self.store.add_joke(joke)).await?;
        tracing::debug!(id = %stored.id, "created joke");
        Ok(stored)
    }

    /// Replaces the body of an existing joke. The new body is deliberately
    /// not validated; only creation enforces non-emptiness.
    pub async fn update_body(&self, new_body: &str, id: &str) -> Result<(), CatalogError> {
        self.guarded(self.store.update_by_id(new_body, id)).await
    }

    /// Registers a user, rejecting empty and duplicate usernames.
    pub async fn register_user(&self, user: NewUser) -> Result<User, CatalogError> {
        if user.username.trim().is_empty() {
            return Err(CatalogError::Validation(
                "username must not be empty".to_string(),
            ));
        }
        if self.guarded(self.store.user_exists(&user.username)).await? {
            return Err(CatalogError::Validation(format!(
                "username {:?} already exists",
                user.username
            )));
        }
        self.guarded(self.store.add_user(user)).await
    }

    /// Deferred aggregation: jokes created in a given month.
    pub async fn jokes_by_month(&self, month: u32) -> Result<usize, CatalogError> {
        self.guarded(self.store.jokes_by_month(month)).await
    }

    /// Deferred aggregation: busiest month of a year with its count.
    pub async fn month_and_count(&self, year: i32) -> Result<(u32, usize), CatalogError> {
        self.guarded(self.store.month_and_count(year)).await
    }

    /// Deferred aggregation: users that have created no jokes.
    pub async fn users_without_jokes(&self) -> Result<Vec<String>, CatalogError> {
        self.guarded(self.store.users_without_jokes()).await
    }
}
