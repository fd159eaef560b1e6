//! Catalog Service Module
//!
//! The stateless request layer between external callers and the record store.
//!
//! ## Core Concepts
//! - **Parameter contracts**: caller-supplied limits arrive as text and must
//!   parse as non-negative integers before any store call is issued.
//! - **Outcome mapping**: every store fault is classified into one of the
//!   typed `CatalogError` kinds; no retries, no substituted defaults.
//! - **Injection**: the service holds an immutable `Arc<dyn JokeStore>`
//!   supplied at construction, so test doubles slot in without globals.

pub mod handlers;
pub mod service;
pub mod types;
