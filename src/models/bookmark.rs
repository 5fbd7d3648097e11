// src/models/bookmark.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'bookmarks' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    pub user_id: i64,
    pub quiz_id: i64,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Response of the bookmark toggle endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookmarkToggleResponse {
    pub quiz_id: i64,
    pub is_bookmarked: bool,
}
