use super::JokeStore;
use super::tokenizer::{tokenize_query, tokenize_text};
use crate::catalog::types::{Joke, NewJoke, NewUser, User};
use crate::error::StoreError;

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use uuid::Uuid;

/// In-memory `JokeStore` backed by concurrent maps.
///
/// Jokes are keyed by id; an inverted index maps lowercased terms of `title`
/// and `body` to the ids containing them, so text search never scans the full
/// corpus. The index is maintained on every insert and body update.
pub struct MemoryStore {
    jokes: DashMap<String, Joke>,
    index: DashMap<String, HashSet<String>>,
    users: DashMap<String, User>,
}

/// Seed file entry. Records without an id get one minted at load.
#[derive(Debug, Deserialize)]
struct SeedJoke {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    body: String,
    #[serde(default)]
    score: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            jokes: DashMap::new(),
            index: DashMap::new(),
            users: DashMap::new(),
        }
    }

    /// Loads a JSON array of jokes (the original corpus format) into the
    /// store, indexing each one. Returns the number of records loaded.
    pub fn seed_from_file(&self, path: &Path) -> Result<usize> {
        let raw = std::fs::read_to_string(path)?;
        let seeds: Vec<SeedJoke> = serde_json::from_str(&raw)?;
        let count = seeds.len();

        for seed in seeds {
            let id = if seed.id.is_empty() {
                Uuid::new_v4().to_string()
            } else {
                seed.id
            };
            let joke = Joke {
                id: id.clone(),
                title: seed.title,
                body: seed.body,
                score: seed.score,
            };
            self.index_joke(&joke);
            self.jokes.insert(id, joke);
        }

        Ok(count)
    }

    pub fn joke_count(&self) -> usize {
        self.jokes.len()
    }

    fn index_terms(joke: &Joke) -> HashSet<String> {
        let mut terms = tokenize_text(&joke.title);
        terms.extend(tokenize_text(&joke.body));
        terms
    }

    fn index_joke(&self, joke: &Joke) {
        for term in Self::index_terms(joke) {
            self.index
                .entry(term)
                .or_insert_with(HashSet::new)
                .insert(joke.id.clone());
        }
    }

    fn unindex(&self, id: &str, terms: impl IntoIterator<Item = String>) {
        for term in terms {
            if let Some(mut ids) = self.index.get_mut(&term) {
                ids.remove(id);
            }
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JokeStore for MemoryStore {
    async fn find_id(&self, id: &str) -> Result<Joke, StoreError> {
        self.jokes
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound)
    }

    async fn funniest(&self, limit: usize) -> Result<Vec<Joke>, StoreError> {
        let mut all: Vec<Joke> = self.jokes.iter().map(|entry| entry.value().clone()).collect();
        // Ties broken by id so repeated calls return the identical sequence.
        all.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.id.cmp(&b.id)));
        all.truncate(limit);
        Ok(all)
    }

    async fn random(&self, limit: usize) -> Result<Vec<Joke>, StoreError> {
        let all: Vec<Joke> = self.jokes.iter().map(|entry| entry.value().clone()).collect();
        let sample = all
            .choose_multiple(&mut rand::thread_rng(), limit)
            .cloned()
            .collect();
        Ok(sample)
    }

    async fn text_search(&self, query: &str) -> Result<Vec<Joke>, StoreError> {
        let terms = tokenize_query(query);

        let mut hits: HashMap<String, usize> = HashMap::new();
        for term in terms.iter() {
            if let Some(ids) = self.index.get(term) {
                for id in ids.iter() {
                    hits.entry(id.clone())
                        .and_modify(|matched| *matched += 1)
                        .or_insert(1);
                }
            }
        }

        let mut scored: Vec<(Joke, usize)> = Vec::new();
        for (id, matched) in hits.iter() {
            if let Some(joke) = self.jokes.get(id) {
                scored.push((joke.value().clone(), *matched));
            }
        }

        scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.id.cmp(&b.0.id)));
        Ok(scored.into_iter().map(|(joke, _)| joke).collect())
    }

    async fn add_joke(&self, joke: NewJoke) -> Result<Joke, StoreError> {
        let joke = Joke {
            id: Uuid::new_v4().to_string(),
            title: joke.title,
            body: joke.body,
            score: joke.score,
        };
        self.index_joke(&joke);
        self.jokes.insert(joke.id.clone(), joke.clone());
        Ok(joke)
    }

    async fn update_by_id(&self, body: &str, id: &str) -> Result<(), StoreError> {
        let (old_terms, new_terms) = {
            let Some(mut entry) = self.jokes.get_mut(id) else {
                return Err(StoreError::NotFound);
            };
            let old_terms = Self::index_terms(&entry);
            entry.body = body.to_string();
            (old_terms, Self::index_terms(&entry))
        };

        let stale: Vec<String> = old_terms.difference(&new_terms).cloned().collect();
        self.unindex(id, stale);
        for term in new_terms.difference(&old_terms) {
            self.index
                .entry(term.clone())
                .or_insert_with(HashSet::new)
                .insert(id.to_string());
        }

        Ok(())
    }

    async fn add_user(&self, user: NewUser) -> Result<User, StoreError> {
        match self.users.entry(user.username) {
            Entry::Occupied(taken) => Err(StoreError::Unavailable(format!(
                "username {:?} already exists",
                taken.key()
            ))),
            Entry::Vacant(slot) => {
                let user = User {
                    id: Uuid::new_v4().to_string(),
                    username: slot.key().clone(),
                    password_hash: user.password_hash,
                    token: None,
                    refresh_token: None,
                };
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn user_exists(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self.users.contains_key(username))
    }

    async fn find_user(&self, username: &str) -> Result<User, StoreError> {
        self.users
            .get(username)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound)
    }
}
