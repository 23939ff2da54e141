//! # Store Sessions
//!
//! A [`StoreSession`] is a scoped unit of work against the store. It
//! wraps a pooled connection; dropping the session returns the
//! connection to the pool whether the operation succeeded or failed.
//!
//! Every operation is a single atomic statement, except the partial
//! update which runs its read-merge-write inside one transaction.

use chrono::Utc;
use sqlx::pool::PoolConnection;
use sqlx::{Acquire, Sqlite};

use super::errors::StoreResult;
use super::record::{Advertisement, AdvertisementPatch, NewAdvertisement, SearchFilter};

const SELECT_BY_ID: &str = "SELECT id, title, description, price, author, created_at \
     FROM advertisements WHERE id = ?1";

/// Scoped unit of work against the advertisement store
pub struct StoreSession {
    conn: PoolConnection<Sqlite>,
}

impl StoreSession {
    pub(super) fn new(conn: PoolConnection<Sqlite>) -> Self {
        Self { conn }
    }

    /// Insert a new record. The store assigns `id` and `created_at`.
    pub async fn insert(&mut self, ad: &NewAdvertisement) -> StoreResult<Advertisement> {
        let created = sqlx::query_as::<_, Advertisement>(
            "INSERT INTO advertisements (title, description, price, author, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             RETURNING id, title, description, price, author, created_at",
        )
        .bind(&ad.title)
        .bind(&ad.description)
        .bind(ad.price)
        .bind(&ad.author)
        .bind(Utc::now())
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(created)
    }

    /// Fetch a record by id.
    pub async fn fetch(&mut self, id: i64) -> StoreResult<Option<Advertisement>> {
        let ad = sqlx::query_as::<_, Advertisement>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(ad)
    }

    /// Apply a partial update. Only supplied fields change; `id` and
    /// `created_at` are immutable. Returns `None` when the id is absent.
    pub async fn update_fields(
        &mut self,
        id: i64,
        patch: &AdvertisementPatch,
    ) -> StoreResult<Option<Advertisement>> {
        let mut tx = self.conn.begin().await?;

        let Some(mut ad) = sqlx::query_as::<_, Advertisement>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(title) = &patch.title {
            ad.title = title.clone();
        }
        if let Some(description) = &patch.description {
            ad.description = description.clone();
        }
        if let Some(price) = patch.price {
            ad.price = price;
        }
        if let Some(author) = &patch.author {
            ad.author = author.clone();
        }

        sqlx::query(
            "UPDATE advertisements SET title = ?1, description = ?2, price = ?3, author = ?4 \
             WHERE id = ?5",
        )
        .bind(&ad.title)
        .bind(&ad.description)
        .bind(ad.price)
        .bind(&ad.author)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(ad))
    }

    /// Delete a record by id. Returns `false` when the id is absent.
    pub async fn delete(&mut self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM advertisements WHERE id = ?1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Filtered search, most recent first.
    ///
    /// Price bounds and ordering run in SQL; the case-insensitive
    /// substring match on title/author is a portable predicate applied to
    /// the candidate rows (see [`SearchFilter::matches_text`]).
    pub async fn search(&mut self, filter: &SearchFilter) -> StoreResult<Vec<Advertisement>> {
        let mut sql = String::from(
            "SELECT id, title, description, price, author, created_at FROM advertisements",
        );

        let mut bounds = Vec::new();
        if filter.min_price.is_some() {
            bounds.push("price >= ?");
        }
        if filter.max_price.is_some() {
            bounds.push("price <= ?");
        }
        if !bounds.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&bounds.join(" AND "));
        }
        sql.push_str(" ORDER BY created_at DESC, id DESC");

        let mut query = sqlx::query_as::<_, Advertisement>(&sql);
        if let Some(min) = filter.min_price {
            query = query.bind(min);
        }
        if let Some(max) = filter.max_price {
            query = query.bind(max);
        }

        let rows = query.fetch_all(&mut *self.conn).await?;
        Ok(rows.into_iter().filter(|ad| filter.matches_text(ad)).collect())
    }
}
