//! Joke Catalog Service Library
//!
//! This library crate defines the core modules of the catalog service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`catalog`**: The request layer. A stateless service that validates and
//!   normalizes caller parameters, delegates queries to the store, and maps
//!   store outcomes to typed results. Also hosts the thin HTTP adapter.
//! - **`store`**: The persistence layer contract. Defines the `JokeStore`
//!   capability trait (fetch-by-id, ranked-top-N, random-sample-N, indexed
//!   text search, insert, update-by-id) and ships an in-memory implementation
//!   backed by a pre-built inverted index.
//! - **`error`**: Shared error kinds crossing the service/store boundary.

pub mod catalog;
pub mod error;
pub mod store;
