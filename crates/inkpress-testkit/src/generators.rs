//! Proptest generators for property-based testing.

use proptest::prelude::*;

use inkpress_core::{
    CategoryDraft, CategoryStatus, CommentDraft, CommentStatus, EntityId, PostDraft, PostStatus,
};

/// Generate a short human-ish text field (never blank).
pub fn text() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,23}".prop_map(String::from)
}

/// Generate free-form content, possibly empty.
pub fn content() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z ,.!?]{1,40}", 0..4).prop_map(|lines| lines.join("\n"))
}

/// Generate an entity id string.
pub fn entity_id() -> impl Strategy<Value = EntityId> {
    "[a-z0-9-]{1,36}".prop_map(EntityId::new)
}

/// Generate a post status.
pub fn post_status() -> impl Strategy<Value = PostStatus> {
    prop_oneof![Just(PostStatus::Published), Just(PostStatus::Draft)]
}

/// Generate a comment status.
pub fn comment_status() -> impl Strategy<Value = CommentStatus> {
    prop_oneof![
        Just(CommentStatus::Pending),
        Just(CommentStatus::Approved),
        Just(CommentStatus::Rejected),
    ]
}

/// Generate a category status.
pub fn category_status() -> impl Strategy<Value = CategoryStatus> {
    prop_oneof![Just(CategoryStatus::Active), Just(CategoryStatus::Inactive)]
}

/// Generate a valid slug.
pub fn slug() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,8}(-[a-z0-9]{1,8}){0,3}".prop_map(String::from)
}

/// Generate a hex color.
pub fn color() -> impl Strategy<Value = String> {
    "#[0-9A-F]{6}".prop_map(String::from)
}

/// Generate a valid post draft.
pub fn post_draft() -> impl Strategy<Value = PostDraft> {
    (text(), content(), text(), post_status()).prop_map(|(title, content, author, status)| {
        PostDraft {
            title,
            content,
            author,
            status,
        }
    })
}

/// Generate a valid comment draft.
pub fn comment_draft() -> impl Strategy<Value = CommentDraft> {
    (entity_id(), text(), "[a-zA-Z][a-zA-Z ,.!?]{0,59}", comment_status()).prop_map(
        |(post_id, author, content, status)| CommentDraft {
            post_id,
            author,
            content,
            status,
        },
    )
}

/// Generate a valid category draft.
pub fn category_draft() -> impl Strategy<Value = CategoryDraft> {
    (text(), content(), slug(), color(), category_status()).prop_map(
        |(name, description, slug, color, status)| CategoryDraft {
            name,
            description,
            slug,
            color,
            status,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::TestFixture;
    use inkpress_core::validation::{
        is_valid_color, is_valid_slug, validate_category_draft, validate_comment_draft,
        validate_post_draft,
    };

    proptest! {
        #[test]
        fn generated_post_drafts_validate(draft in post_draft()) {
            prop_assert!(validate_post_draft(&draft).is_ok());
        }

        #[test]
        fn generated_comment_drafts_validate(draft in comment_draft()) {
            prop_assert!(validate_comment_draft(&draft).is_ok());
        }

        #[test]
        fn generated_category_drafts_validate(draft in category_draft()) {
            prop_assert!(validate_category_draft(&draft).is_ok());
        }

        #[test]
        fn generated_slugs_and_colors_are_valid(s in slug(), c in color()) {
            prop_assert!(is_valid_slug(&s));
            prop_assert!(is_valid_color(&c));
        }

        /// add() returns a record carrying the draft's fields, and the
        /// record lands at the head of the collection.
        #[test]
        fn added_record_matches_draft(draft in post_draft()) {
            let fixture = TestFixture::empty();

            let created = fixture.cms.posts.add(draft.clone());

            prop_assert_eq!(&created.title, &draft.title);
            prop_assert_eq!(&created.content, &draft.content);
            prop_assert_eq!(&created.author, &draft.author);
            prop_assert_eq!(created.status, draft.status);
            prop_assert_eq!(fixture.cms.posts.list()[0].id.clone(), created.id);
        }

        /// Collections round-trip through their slots unchanged.
        #[test]
        fn rehydration_is_lossless(drafts in prop::collection::vec(comment_draft(), 1..6)) {
            let fixture = TestFixture::empty();
            for draft in drafts {
                fixture.cms.comments.add(draft);
            }
            let snapshot = fixture.cms.comments.list();

            let reopened = fixture.reopen();
            prop_assert_eq!(reopened.comments.list(), snapshot);
        }
    }
}
