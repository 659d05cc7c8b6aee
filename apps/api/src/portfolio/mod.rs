//! Portfolio persistence: saving finalized records and fetching them back
//! by their public slug.

pub mod handlers;

use std::collections::HashSet;

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::record::{PortfolioRow, UserRecord};

/// Insert attempts before a concurrent same-slug save is given up on.
const SLUG_INSERT_ATTEMPTS: u32 = 3;

/// Identity of a persisted portfolio, returned to the client after submit.
#[derive(Debug, Clone, Serialize)]
pub struct SavedPortfolio {
    pub id: Uuid,
    pub slug: String,
}

/// Derives a URL slug from a display name: lowercased, whitespace runs
/// collapsed to single hyphens, everything but ASCII alphanumerics and
/// hyphens dropped. Names that slugify to nothing become "portfolio".
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true; // suppress leading hyphens

    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if (c.is_whitespace() || c == '-') && !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        "portfolio".to_string()
    } else {
        slug
    }
}

/// Smallest free slug for `base`: the base itself, then `base-2`, `base-3`,
/// and so on. Only exact candidate matches count as taken; a sibling such
/// as `base-x` (a different name that happens to share the prefix) never
/// shifts the outcome, and gaps left by such siblings are reused.
fn pick_slug(base: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(base) {
        return base.to_string();
    }
    let mut n: u64 = 2;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

async fn next_free_slug(pool: &PgPool, base: &str) -> Result<String, AppError> {
    let rows: Vec<(String,)> =
        sqlx::query_as("SELECT slug FROM portfolios WHERE slug = $1 OR slug LIKE $1 || '-%'")
            .bind(base)
            .fetch_all(pool)
            .await?;
    let taken: HashSet<String> = rows.into_iter().map(|(slug,)| slug).collect();
    Ok(pick_slug(base, &taken))
}

/// Persists a finalized record under the smallest free slug derived from
/// the record name.
///
/// The probe and the insert are separate statements, so a concurrent save
/// of the same name can grab the candidate in between. The unique index on
/// `slug` catches that; the insert re-probes and retries a bounded number
/// of times before surfacing the database error.
pub async fn save_portfolio(pool: &PgPool, record: &UserRecord) -> Result<SavedPortfolio, AppError> {
    let base = slugify(&record.name);
    let id = Uuid::new_v4();
    let data = serde_json::to_value(record)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("record serialization failed: {e}")))?;

    let mut attempt = 0;
    loop {
        attempt += 1;
        let slug = next_free_slug(pool, &base).await?;

        match sqlx::query(
            "INSERT INTO portfolios (id, slug, template_id, record, created_at)
             VALUES ($1, $2, $3, $4, NOW())",
        )
        .bind(id)
        .bind(&slug)
        .bind(&record.template_id)
        .bind(&data)
        .execute(pool)
        .await
        {
            Ok(_) => return Ok(SavedPortfolio { id, slug }),
            Err(sqlx::Error::Database(db))
                if db.is_unique_violation() && attempt < SLUG_INSERT_ATTEMPTS =>
            {
                tracing::warn!(%slug, attempt, "slug taken concurrently, re-probing");
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Fetches a portfolio by slug. A missing slug is `NotFound` — a distinct,
/// non-retryable outcome, not a transient failure.
pub async fn fetch_by_slug(pool: &PgPool, slug: &str) -> Result<PortfolioRow, AppError> {
    let row: Option<PortfolioRow> = sqlx::query_as(
        "SELECT id, slug, template_id, record, created_at FROM portfolios WHERE slug = $1",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    row.ok_or_else(|| AppError::NotFound(format!("no portfolio with slug '{slug}'")))
}

/// Deserializes the stored JSONB record back into a `UserRecord`.
pub fn record_from_row(row: &PortfolioRow) -> Result<UserRecord, AppError> {
    serde_json::from_value(row.record.clone())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("stored record is malformed: {e}")))
}
