// src/models/category.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category_pic: Option<String>,
    pub creator_id: i64,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// DTO for creating or updating a category.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(length(min = 3, max = 100, message = "Name should have between 3 and 100 characters."))]
    pub name: String,
    #[validate(length(
        min = 10,
        max = 255,
        message = "Description should have between 10 and 255 characters."
    ))]
    pub description: String,
    #[serde(default, alias = "categoryPic")]
    #[validate(custom(function = crate::utils::html::validate_picture))]
    pub category_pic: Option<String>,
}

/// Compact category info embedded in quiz responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: i64,
    pub name: String,
}
