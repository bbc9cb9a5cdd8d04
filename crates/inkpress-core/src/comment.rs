//! The Comment entity: a reader comment awaiting moderation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::types::EntityId;

/// Moderation status of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    Pending,
    Approved,
    Rejected,
}

impl CommentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentStatus::Pending => "pending",
            CommentStatus::Approved => "approved",
            CommentStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A comment on a post.
///
/// `post_id` references a Post by id but is not validated against the
/// posts collection; resolving it is the consumer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: EntityId,
    pub post_id: EntityId,
    pub author: String,
    pub content: String,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied comment fields; id and created_at are generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub post_id: EntityId,
    pub author: String,
    pub content: String,
    pub status: CommentStatus,
}

impl Entity for Comment {
    type Draft = CommentDraft;

    const KIND: &'static str = "comments";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn create(id: EntityId, created_at: DateTime<Utc>, draft: CommentDraft) -> Self {
        Self {
            id,
            post_id: draft.post_id,
            author: draft.author,
            content: draft.content,
            status: draft.status,
            created_at,
        }
    }

    fn merge(&mut self, draft: CommentDraft) {
        self.post_id = draft.post_id;
        self.author = draft.author;
        self.content = draft.content;
        self.status = draft.status;
    }
}
