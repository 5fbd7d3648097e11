// src/utils/sort.rs

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    error::AppError,
    models::quiz::{QuizSortField, SortDirection, SortOrder},
};

static SORT_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<field>[A-Za-z_]+)(?::(?P<dir>[A-Za-z]+))?$").expect("valid sort regex")
});

/// Parses a sort expression such as `title:asc,createdAt:desc`.
///
/// Direction defaults to ascending. A field listed twice keeps its last
/// direction at its first position. Blank input yields no ordering.
pub fn parse_sort(expr: &str) -> Result<Vec<SortOrder>, AppError> {
    let mut orders: Vec<SortOrder> = Vec::new();

    for term in expr.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let caps = SORT_TERM
            .captures(term)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid sort term '{term}'")))?;

        let field = parse_field(&caps["field"])?;
        let direction = match caps.name("dir").map(|m| m.as_str().to_ascii_lowercase()) {
            None => SortDirection::Asc,
            Some(dir) if dir == "asc" => SortDirection::Asc,
            Some(dir) if dir == "desc" => SortDirection::Desc,
            Some(dir) => {
                return Err(AppError::BadRequest(format!(
                    "Invalid sort direction '{dir}'"
                )));
            }
        };

        match orders.iter_mut().find(|o| o.field == field) {
            Some(existing) => existing.direction = direction,
            None => orders.push(SortOrder { field, direction }),
        }
    }

    Ok(orders)
}

fn parse_field(name: &str) -> Result<QuizSortField, AppError> {
    let field = match name {
        "id" => QuizSortField::Id,
        "title" => QuizSortField::Title,
        "description" => QuizSortField::Description,
        "timeLimit" | "time_limit" => QuizSortField::TimeLimit,
        "pass" => QuizSortField::Pass,
        "severity" => QuizSortField::Severity,
        "createdAt" | "created_at" => QuizSortField::CreatedAt,
        "updatedAt" | "updated_at" => QuizSortField::UpdatedAt,
        other => {
            return Err(AppError::BadRequest(format!(
                "Cannot sort quizzes by '{other}'"
            )));
        }
    };
    Ok(field)
}

/// Renders an `ORDER BY` clause from whitelisted columns.
/// Falls back to `q.id ASC` and always appends `q.id` as a tiebreaker.
pub fn order_by_clause(orders: &[SortOrder]) -> String {
    let mut terms: Vec<String> = orders
        .iter()
        .map(|o| {
            let dir = match o.direction {
                SortDirection::Asc => "ASC",
                SortDirection::Desc => "DESC",
            };
            format!("{} {}", o.field.column(), dir)
        })
        .collect();

    if !orders.iter().any(|o| o.field == QuizSortField::Id) {
        terms.push("q.id ASC".to_string());
    }

    format!(" ORDER BY {}", terms.join(", "))
}
