//! Record Store Module
//!
//! Defines the capability contract for durable joke storage and ships the
//! bundled in-memory implementation.
//!
//! ## Core Concepts
//! - **Contract over engine**: `JokeStore` fixes the query semantics (ordering,
//!   sampling, not-found signaling) without fixing a storage technology.
//! - **Indexed search**: text queries run against a pre-built inverted index,
//!   never a per-query scan over every record.
//! - **Not-found signal**: fetch-by-id and update-by-id report an explicit
//!   `StoreError::NotFound`, distinguishable from an empty successful result.

pub mod memory;
pub mod tokenizer;


use crate::catalog::types::{Joke, NewJoke, NewUser, User};
use crate::error::StoreError;
use async_trait::async_trait;

/// Capability interface for durable joke storage.
///
/// The catalog service holds an immutable `Arc<dyn JokeStore>` supplied at
/// construction; implementations must be safe to share across concurrent
/// requests. Single-record writes are atomic; the contract adds no
/// cross-record transactional guarantees.
#[async_trait]
pub trait JokeStore: Send + Sync {
    /// Equality match on `id`. At most one record can match (ids are unique).
    /// Returns [`StoreError::NotFound`] when absent.
    async fn find_id(&self, id: &str) -> Result<Joke, StoreError>;

    /// The `limit` highest-score records, sorted by `score` descending with
    /// ties broken by ascending `id` so repeated calls against unchanged data
    /// return the identical sequence. `limit == 0` yields an empty vec, not
    /// an error.
    async fn funniest(&self, limit: usize) -> Result<Vec<Joke>, StoreError>;

    /// Up to `limit` records drawn without replacement. Each call draws an
    /// independent sample; implementations must never serve a fixed or cached
    /// selection. Distribution need not be perfectly uniform.
    async fn random(&self, limit: usize) -> Result<Vec<Joke>, StoreError>;

    /// Matches `query` terms against `title` and `body` through the store's
    /// text index. Zero matches is a successful empty result (`Ok(vec![])`),
    /// applied uniformly across all call paths.
    async fn text_search(&self, query: &str) -> Result<Vec<Joke>, StoreError>;

    /// Atomically inserts a record. The store mints the id; the stored joke
    /// is returned with its id populated.
    async fn add_joke(&self, joke: NewJoke) -> Result<Joke, StoreError>;

    /// Replaces only the `body` of the record with the given id, leaving
    /// `title` and `score` untouched. A zero-match update reports
    /// [`StoreError::NotFound`], distinguishable from a write success.
    async fn update_by_id(&self, body: &str, id: &str) -> Result<(), StoreError>;

    /// Inserts a user. Usernames are unique; the caller is expected to check
    /// [`JokeStore::user_exists`] first.
    async fn add_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Whether a user with this username already exists.
    async fn user_exists(&self, username: &str) -> Result<bool, StoreError>;

    /// Fetches a user by username, [`StoreError::NotFound`] when absent.
    async fn find_user(&self, username: &str) -> Result<User, StoreError>;

    /// Number of jokes created in the given month (1-12). Deferred feature.
    async fn jokes_by_month(&self, month: u32) -> Result<usize, StoreError> {
        let _ = month;
        Err(StoreError::Unimplemented("jokes_by_month"))
    }

    /// Month of the given year with the most created jokes, with its count.
    /// Deferred feature.
    async fn month_and_count(&self, year: i32) -> Result<(u32, usize), StoreError> {
        let _ = year;
        Err(StoreError::Unimplemented("month_and_count"))
    }

    /// Usernames that have created no jokes. Deferred feature.
    async fn users_without_jokes(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Unimplemented("users_without_jokes"))
    }
}
