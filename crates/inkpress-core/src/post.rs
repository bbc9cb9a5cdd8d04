//! The Post entity: a blog article visible in the admin posts table.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::types::EntityId;

/// Publication status of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostStatus {
    Published,
    Draft,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Published => "Published",
            PostStatus::Draft => "Draft",
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A blog post.
///
/// `date` is assigned at creation and never changed by updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: NaiveDate,
    pub status: PostStatus,
}

/// Caller-supplied post fields; id and date are generated by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub status: PostStatus,
}

impl Entity for Post {
    type Draft = PostDraft;

    const KIND: &'static str = "posts";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn create(id: EntityId, created_at: DateTime<Utc>, draft: PostDraft) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            author: draft.author,
            date: created_at.date_naive(),
            status: draft.status,
        }
    }

    fn merge(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.author = draft.author;
        self.status = draft.status;
    }
}
