//! The blog settings document: a single record edited by the settings
//! panel and persisted whole under its own slot.

use serde::{Deserialize, Serialize};

/// Admin UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    Auto,
}

/// The full settings document.
///
/// `#[serde(default)]` makes a partial document merge over the defaults
/// field by field, which is what settings import relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogSettings {
    // Site information
    pub site_name: String,
    pub site_description: String,
    pub site_url: String,
    pub admin_email: String,

    // Content
    pub posts_per_page: u32,
    pub allow_comments: bool,
    pub moderate_comments: bool,

    // Author
    pub author_name: String,
    pub author_bio: String,
    pub author_email: String,

    // SEO
    pub meta_title: String,
    pub meta_description: String,
    pub seo_keywords: String,

    // Appearance
    pub theme: Theme,
    pub primary_color: String,

    // Notifications
    pub email_notifications: bool,
    pub comment_notifications: bool,

    // Security
    pub enable_two_factor: bool,
    /// Session timeout in minutes.
    pub session_timeout: u32,
}

impl Default for BlogSettings {
    fn default() -> Self {
        Self {
            site_name: "My Blog CMS".into(),
            site_description: "A professional blog content management system".into(),
            site_url: "https://myblog.com".into(),
            admin_email: "admin@myblog.com".into(),
            posts_per_page: 10,
            allow_comments: true,
            moderate_comments: true,
            author_name: "Oussama".into(),
            author_bio: "Passionate blogger and content creator".into(),
            author_email: "oussama@myblog.com".into(),
            meta_title: "My Blog CMS - Professional Blogging Platform".into(),
            meta_description: "Discover amazing content on our professional blogging platform"
                .into(),
            seo_keywords: "blog, cms, content, writing, articles".into(),
            theme: Theme::Light,
            primary_color: "#3b82f6".into(),
            email_notifications: true,
            comment_notifications: true,
            enable_two_factor: false,
            session_timeout: 60,
        }
    }
}
