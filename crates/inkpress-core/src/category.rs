//! The Category entity: a content grouping with a URL slug and a display
//! color.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::types::EntityId;

/// Whether a category is shown on the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    Active,
    Inactive,
}

impl CategoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryStatus::Active => "active",
            CategoryStatus::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A post category.
///
/// `post_count` is a display-only figure: stamped 0 at creation, carried
/// through updates, never recomputed from the posts collection. The seed
/// data already disagrees with actual post counts, and that drift is part
/// of the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub color: String,
    pub post_count: u32,
    pub created_at: DateTime<Utc>,
    pub status: CategoryStatus,
}

/// Caller-supplied category fields; id, created_at, and post_count are
/// generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    pub slug: String,
    pub color: String,
    pub status: CategoryStatus,
}

impl Entity for Category {
    type Draft = CategoryDraft;

    const KIND: &'static str = "categories";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn create(id: EntityId, created_at: DateTime<Utc>, draft: CategoryDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            slug: draft.slug,
            color: draft.color,
            post_count: 0,
            created_at,
            status: draft.status,
        }
    }

    fn merge(&mut self, draft: CategoryDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.slug = draft.slug;
        self.color = draft.color;
        self.status = draft.status;
    }
}
