//! # Advertisement Records
//!
//! Row and payload types for the `advertisements` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored advertisement row.
///
/// `id` and `created_at` are assigned by the store on insert and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Advertisement {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for inserting a new record.
#[derive(Debug, Clone)]
pub struct NewAdvertisement {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub author: String,
}

/// Partial update payload. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct AdvertisementPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub author: Option<String>,
}

/// Search filter. Supplied filters AND-combine; absent filters do not
/// narrow the result set.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Case-insensitive substring match on title
    pub title: Option<String>,
    /// Case-insensitive substring match on author
    pub author: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
}

impl SearchFilter {
    /// Apply the text filters to a candidate row.
    ///
    /// Lowercase containment keeps the match semantics independent of any
    /// storage-engine pattern operator.
    pub fn matches_text(&self, ad: &Advertisement) -> bool {
        if let Some(title) = &self.title {
            if !contains_ci(&ad.title, title) {
                return false;
            }
        }
        if let Some(author) = &self.author {
            if !contains_ci(&ad.author, author) {
                return false;
            }
        }
        true
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
