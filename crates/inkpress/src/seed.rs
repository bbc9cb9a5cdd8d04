//! Seed datasets: the fixed default collections used when a slot holds
//! nothing usable.
//!
//! Plain data. Note that seed `post_count` figures are independent of the
//! actual posts collection - the counter is display-only and drifts.

use chrono::{DateTime, NaiveDate, Utc};
use inkpress_core::{
    Category, CategoryStatus, Comment, CommentStatus, EntityId, Post, PostStatus,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed date is valid")
}

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("seed timestamp is valid RFC 3339")
}

/// Default posts.
pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: EntityId::new("1"),
            title: "Building a Blog with Next.js".into(),
            content: "A walkthrough of setting up a blog from scratch, from routing to deployment.".into(),
            author: "Oussama".into(),
            date: day(2025, 7, 14),
            status: PostStatus::Published,
        },
        Post {
            id: EntityId::new("2"),
            title: "Understanding React Server Components".into(),
            content: "What server components are, what they are not, and when to reach for them.".into(),
            author: "Oussama".into(),
            date: day(2025, 7, 10),
            status: PostStatus::Draft,
        },
        Post {
            id: EntityId::new("3"),
            title: "Styling with Tailwind CSS".into(),
            content: "Utility-first styling in practice, with the patterns that keep markup readable.".into(),
            author: "Oussama".into(),
            date: day(2025, 7, 12),
            status: PostStatus::Published,
        },
    ]
}

/// Default comments.
pub fn comments() -> Vec<Comment> {
    vec![
        Comment {
            id: EntityId::new("1"),
            post_id: EntityId::new("1"),
            author: "Ahmed Hassan".into(),
            content: "Great article! I really enjoyed reading about Next.js features. The explanation of server-side rendering was particularly helpful.".into(),
            status: CommentStatus::Approved,
            created_at: ts("2025-07-15T10:30:00Z"),
        },
        Comment {
            id: EntityId::new("2"),
            post_id: EntityId::new("1"),
            author: "Sarah Johnson".into(),
            content: "Thanks for sharing this. Could you write more about the app router? I'm still getting confused between pages and app router.".into(),
            status: CommentStatus::Approved,
            created_at: ts("2025-07-15T14:20:00Z"),
        },
        Comment {
            id: EntityId::new("3"),
            post_id: EntityId::new("2"),
            author: "Mike Chen".into(),
            content: "This is exactly what I was looking for! React Server Components seem powerful but complex.".into(),
            status: CommentStatus::Pending,
            created_at: ts("2025-07-16T09:15:00Z"),
        },
        Comment {
            id: EntityId::new("4"),
            post_id: EntityId::new("3"),
            author: "Lisa Rodriguez".into(),
            content: "Tailwind CSS has been a game changer for my workflow. Love the utility-first approach!".into(),
            status: CommentStatus::Approved,
            created_at: ts("2025-07-16T16:45:00Z"),
        },
        Comment {
            id: EntityId::new("5"),
            post_id: EntityId::new("1"),
            author: "Anonymous User".into(),
            content: "This article is terrible and completely wrong. Next.js is overrated.".into(),
            status: CommentStatus::Rejected,
            created_at: ts("2025-07-17T08:30:00Z"),
        },
        Comment {
            id: EntityId::new("6"),
            post_id: EntityId::new("2"),
            author: "David Kim".into(),
            content: "Could you provide some practical examples? The theory is good but I need to see it in action.".into(),
            status: CommentStatus::Pending,
            created_at: ts("2025-07-17T12:00:00Z"),
        },
        Comment {
            id: EntityId::new("7"),
            post_id: EntityId::new("3"),
            author: "Emma Thompson".into(),
            content: "I've been using Bootstrap for years. Should I really switch to Tailwind? What are the main benefits?".into(),
            status: CommentStatus::Approved,
            created_at: ts("2025-07-17T20:15:00Z"),
        },
    ]
}

/// Default categories.
pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: EntityId::new("1"),
            name: "Web Development".into(),
            description: "Articles about modern web development technologies, frameworks, and best practices.".into(),
            slug: "web-development".into(),
            color: "#3B82F6".into(),
            post_count: 2,
            created_at: ts("2025-07-10T10:00:00Z"),
            status: CategoryStatus::Active,
        },
        Category {
            id: EntityId::new("2"),
            name: "React".into(),
            description: "Deep dives into React concepts, hooks, components, and the React ecosystem.".into(),
            slug: "react".into(),
            color: "#06B6D4".into(),
            post_count: 1,
            created_at: ts("2025-07-11T14:30:00Z"),
            status: CategoryStatus::Active,
        },
        Category {
            id: EntityId::new("3"),
            name: "CSS & Styling".into(),
            description: "Modern CSS techniques, frameworks like Tailwind, and styling best practices.".into(),
            slug: "css-styling".into(),
            color: "#8B5CF6".into(),
            post_count: 1,
            created_at: ts("2025-07-12T09:15:00Z"),
            status: CategoryStatus::Active,
        },
        Category {
            id: EntityId::new("4"),
            name: "JavaScript".into(),
            description: "Core JavaScript concepts, ES6+ features, and advanced programming patterns.".into(),
            slug: "javascript".into(),
            color: "#F59E0B".into(),
            post_count: 0,
            created_at: ts("2025-07-13T16:45:00Z"),
            status: CategoryStatus::Active,
        },
        Category {
            id: EntityId::new("5"),
            name: "Backend Development".into(),
            description: "Server-side development, APIs, databases, and backend architectures.".into(),
            slug: "backend-development".into(),
            color: "#10B981".into(),
            post_count: 0,
            created_at: ts("2025-07-14T11:20:00Z"),
            status: CategoryStatus::Inactive,
        },
        Category {
            id: EntityId::new("6"),
            name: "DevOps".into(),
            description: "Deployment, CI/CD, containerization, and development operations.".into(),
            slug: "devops".into(),
            color: "#EF4444".into(),
            post_count: 0,
            created_at: ts("2025-07-15T13:00:00Z"),
            status: CategoryStatus::Inactive,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(posts().len(), 3);
        assert_eq!(comments().len(), 7);
        assert_eq!(categories().len(), 6);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        for ids in [
            posts().iter().map(|p| p.id.clone()).collect::<Vec<_>>(),
            comments().iter().map(|c| c.id.clone()).collect::<Vec<_>>(),
            categories().iter().map(|c| c.id.clone()).collect::<Vec<_>>(),
        ] {
            let mut deduped = ids.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), ids.len());
        }
    }

    #[test]
    fn test_three_seed_comments_reference_post_one() {
        let count = comments()
            .iter()
            .filter(|c| c.post_id == EntityId::new("1"))
            .count();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_seed_slugs_are_valid() {
        for category in categories() {
            assert!(
                inkpress_core::validation::is_valid_slug(&category.slug),
                "bad slug: {}",
                category.slug
            );
        }
    }
}
