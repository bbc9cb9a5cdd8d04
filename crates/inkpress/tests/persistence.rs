//! Durable persistence: on-disk SQLite round trips, corrupt-slot
//! fallback, and compatibility with the slot JSON format.

use inkpress::{Cms, CommentStatus, EntityId, PostDraft, PostStatus};
use inkpress::{CommentStore, PostStore};
use inkpress_store::{Backend, MemoryBackend, SqliteBackend};
use std::sync::Arc;

#[test]
fn mutations_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blog.db");

    let created = {
        let cms = Cms::open(&path).unwrap();
        cms.posts.remove(&EntityId::new("1"));
        cms.posts.add(PostDraft {
            title: "Durable".into(),
            content: "Still here after reopen.".into(),
            author: "Oussama".into(),
            status: PostStatus::Published,
        })
    };

    let reopened = Cms::open(&path).unwrap();
    assert_eq!(reopened.posts.len(), 3);
    assert_eq!(reopened.posts.list()[0].id, created.id);
    assert!(reopened.posts.get(&EntityId::new("1")).is_none());

    // Untouched stores still hydrate from their seeds.
    assert_eq!(reopened.comments.len(), 7);
}

#[test]
fn corrupt_slot_falls_back_to_seed() {
    let backend = Arc::new(SqliteBackend::open_memory().unwrap());
    backend
        .write(PostStore::SLOT_KEY, "{ this is not json")
        .unwrap();

    let posts = PostStore::hydrate(backend);
    assert_eq!(posts.len(), 3);
}

#[test]
fn wrong_shape_slot_falls_back_to_seed() {
    let backend = Arc::new(MemoryBackend::new());
    // Valid JSON, but not an array of comments.
    backend
        .write(CommentStore::SLOT_KEY, r#"{"comments": 7}"#)
        .unwrap();

    let comments = CommentStore::hydrate(backend);
    assert_eq!(comments.len(), 7);
}

#[test]
fn hydrates_from_slot_format_json() {
    // A slot value in the exact persisted shape: camelCase fields,
    // lowercase comment statuses, RFC 3339 timestamps.
    let raw = r#"[
        {
            "id": "99",
            "postId": "1",
            "author": "Slot Reader",
            "content": "Written by a previous session.",
            "status": "pending",
            "createdAt": "2025-07-18T09:00:00Z"
        }
    ]"#;

    let backend = Arc::new(MemoryBackend::new());
    backend.write(CommentStore::SLOT_KEY, raw).unwrap();

    let comments = CommentStore::hydrate(backend);
    assert_eq!(comments.len(), 1);

    let comment = comments.get(&EntityId::new("99")).unwrap();
    assert_eq!(comment.post_id, EntityId::new("1"));
    assert_eq!(comment.status, CommentStatus::Pending);
    assert_eq!(comment.author, "Slot Reader");
}

#[test]
fn slot_holds_whole_collection_as_json_array() {
    let backend = Arc::new(MemoryBackend::new());
    let posts = PostStore::hydrate(backend.clone());
    posts.remove(&EntityId::new("2"));

    let raw = backend.read(PostStore::SLOT_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["id"], "1");
    assert_eq!(array[0]["status"], "Published");
    assert_eq!(array[1]["date"], "2025-07-12");
}

#[test]
fn settings_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blog.db");

    {
        let cms = Cms::open(&path).unwrap();
        let mut settings = cms.settings.get();
        settings.site_name = "Persisted Blog".into();
        cms.settings.save(settings);
    }

    let reopened = Cms::open(&path).unwrap();
    assert_eq!(reopened.settings.get().site_name, "Persisted Blog");
}
