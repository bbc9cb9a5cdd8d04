//! # Inkpress
//!
//! The data layer of a blog-CMS admin dashboard: persistent entity stores
//! for posts, comments, and categories, plus the settings document.
//!
//! ## Overview
//!
//! Each store owns one in-memory collection, ordered newest-created first,
//! and mirrors it whole into a named persistence slot on every mutation.
//! At construction a store hydrates from its slot, falling back to a fixed
//! seed dataset when nothing usable is persisted.
//!
//! Stores are explicitly constructed and passed to whatever needs them -
//! there is no ambient global. [`Cms`] wires all four stores to one shared
//! backend.
//!
//! ## Key Concepts
//!
//! - **Silent CRUD surface**: `add`/`update`/`remove` never raise. Unknown
//!   ids are ignored; persistence failures are logged and swallowed while
//!   the in-memory mutation stands.
//! - **Whole-collection snapshots**: a slot always holds the complete
//!   serialized collection, never a diff log.
//! - **Single writer**: one session owns the slots; there is no locking
//!   beyond the stores' own interior mutability and no conflict
//!   resolution.
//!
//! ## Usage
//!
//! ```
//! use inkpress::{Cms, PostDraft, PostStatus};
//!
//! let cms = Cms::session();
//!
//! let post = cms.posts.add(PostDraft {
//!     title: "Hello".into(),
//!     content: "First post.".into(),
//!     author: "Oussama".into(),
//!     status: PostStatus::Draft,
//! });
//!
//! assert_eq!(cms.posts.list()[0].id, post.id);
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `inkpress::core` - the entity model (Post, Comment, Category, ...)
//! - `inkpress::store` - the backend abstraction and slot adapter

pub mod categories;
pub mod cms;
pub mod collection;
pub mod comments;
pub mod dashboard;
pub mod error;
pub mod posts;
pub mod seed;
pub mod settings;

// Re-export component crates
pub use inkpress_core as core;
pub use inkpress_store as store;

// Re-export main types for convenience
pub use categories::CategoryStore;
pub use cms::Cms;
pub use collection::EntityStore;
pub use comments::CommentStore;
pub use dashboard::{post_title_index, DashboardStats};
pub use error::{CmsError, Result};
pub use posts::PostStore;
pub use settings::SettingsStore;

// Re-export commonly used core types
pub use inkpress_core::{
    BlogSettings, Category, CategoryDraft, CategoryStatus, Comment, CommentDraft, CommentStatus,
    EntityId, Post, PostDraft, PostStatus, Theme,
};
