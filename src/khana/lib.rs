//! # Khana Architecture
//!
//! Khana is a **UI-agnostic recipe library**. This is not a CLI application
//! that happens to have some library code — it's a library that happens to
//! have a CLI client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - Forwards raw user input; performs no business validation │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: dispatches to book/query/form               │
//! │  - Raw forms in, structured Result types out                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (book.rs, query.rs, form.rs)                          │
//! │  - Record store, filtering, validation                      │
//! │  - Operates on Rust types, no I/O assumptions               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StorageBackend trait                            │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal environment.
//!
//! Two consequences worth calling out:
//!
//! - Validation failure, not-found and write failure are **values**, not
//!   panics or process exits. The storage layer goes one further: a corrupted
//!   recipe slot isn't even an error — it reseeds the built-in defaults and
//!   carries on.
//! - The book is an explicit object with an explicit load step. There is no
//!   module-level collection and no load-on-import; whoever constructs the
//!   book decides which backend it reads from.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`book`]: The record store owning the canonical collection
//! - [`query`]: Filter specs, AND-composed predicates over the collection
//! - [`form`]: Raw-form validation and normalization
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Recipe`, `Difficulty`, `Theme`)
//! - [`seed`]: Built-in starter recipes
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod error;
pub mod form;
pub mod model;
pub mod query;
pub mod seed;
pub mod store;
