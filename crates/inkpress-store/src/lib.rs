//! # Inkpress Store
//!
//! Persistence slots for the Inkpress data layer. Provides a trait-based
//! interface over a durable key-value device, with SQLite and in-memory
//! implementations.
//!
//! ## Overview
//!
//! Each entity store mirrors its whole collection into one named slot: a
//! single key whose value is the serialized JSON array. This crate
//! abstracts the device those slots live in behind the [`Backend`] trait.
//! The primary implementation is [`SqliteBackend`], with [`MemoryBackend`]
//! for tests and session-only use and [`NullBackend`] for environments
//! with no durable storage at all.
//!
//! ## Key Types
//!
//! - [`Backend`] - read/write/delete on string keys
//! - [`SqliteBackend`] - durable storage in a single `slots` table
//! - [`MemoryBackend`] - HashMap-backed, lost on drop
//! - [`NullBackend`] - reads nothing, discards writes
//! - [`slot::load`] / [`slot::save`] - the seed-fallback hydration and
//!   best-effort persistence contract
//!
//! ## Usage
//!
//! ```
//! use inkpress_store::{slot, MemoryBackend};
//!
//! let backend = MemoryBackend::new();
//! slot::save(&backend, "blog-cms-posts", &vec!["..."]);
//! let posts: Vec<String> = slot::load(&backend, "blog-cms-posts", Vec::new);
//! assert_eq!(posts, vec!["...".to_string()]);
//! ```
//!
//! ## Design Notes
//!
//! - **Whole-collection values**: a slot holds the complete serialized
//!   collection, never a diff log.
//! - **Best-effort writes**: `slot::save` logs failures and swallows them;
//!   the in-memory mutation that triggered the save still stands.
//! - **Seed fallback**: `slot::load` falls back to the provided default on
//!   a missing key, a failed read, or an undecodable value.

pub mod error;
pub mod memory;
pub mod migration;
pub mod null;
pub mod slot;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryBackend;
pub use null::NullBackend;
pub use sqlite::SqliteBackend;
pub use traits::Backend;
