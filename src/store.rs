//! Persistent per-user visit counters.
//!
//! Every visit is one `INSERT ... ON CONFLICT DO UPDATE ... RETURNING`
//! statement, so concurrent visits for the same user serialize inside SQLite
//! and each caller gets back the row as it stood right after its own
//! increment. Different users only contend on SQLite's write lock, never on
//! anything held by this process.

use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::VisitRecord;
use crate::models::visit::encode_timestamp;

/// Total attempts for one upsert when SQLite reports lock contention.
const MAX_UPSERT_ATTEMPTS: u32 = 3;
const RETRY_BACKOFF: Duration = Duration::from_millis(20);

const SQLITE_BUSY: i64 = 5;
const SQLITE_LOCKED: i64 = 6;

const UPSERT: &str = r#"
INSERT INTO users (id, views, created_at, updated_at)
VALUES (?1, 1, ?2, ?2)
ON CONFLICT(id) DO UPDATE SET
    views = users.views + 1,
    updated_at = MAX(users.updated_at, excluded.updated_at)
RETURNING id, views, created_at, updated_at
"#;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("user id must not be empty")]
    EmptyUserId,
    #[error("visit store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Unavailable(e)
    }
}

/// Shared handle to the visit table. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct VisitStore {
    pool: SqlitePool,
}

impl VisitStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record one visit for `user_id` at the current time.
    pub async fn record_visit(&self, user_id: &str) -> Result<VisitRecord, StoreError> {
        self.record_visit_at(user_id, Utc::now()).await
    }

    /// Record one visit for `user_id`, stamping it with `now`.
    ///
    /// Creates the row with `views = 1` on first contact; afterwards bumps
    /// `views` by one and moves `updated_at` forward (never backward).
    /// `created_at` is only ever written by the insert.
    pub async fn record_visit_at(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<VisitRecord, StoreError> {
        if user_id.trim().is_empty() {
            return Err(StoreError::EmptyUserId);
        }

        let now = encode_timestamp(now);
        let mut attempt = 1;

        loop {
            let result = sqlx::query_as::<_, VisitRecord>(UPSERT)
                .bind(user_id)
                .bind(&now)
                .fetch_one(&self.pool)
                .await;

            match result {
                Ok(record) => return Ok(record),
                Err(e) if attempt < MAX_UPSERT_ATTEMPTS && is_contention(&e) => {
                    tracing::warn!(attempt, "visit upsert hit lock contention, retrying: {e}");
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Look up the current record without touching it.
    pub async fn find(&self, user_id: &str) -> Result<Option<VisitRecord>, StoreError> {
        let record = sqlx::query_as::<_, VisitRecord>(
            "SELECT id, views, created_at, updated_at FROM users WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Close every pooled connection. Later calls fail with `Unavailable`.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_contention(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    // Extended result codes keep the primary code in the low byte.
    db_err
        .code()
        .and_then(|code| code.parse::<i64>().ok())
        .is_some_and(|code| matches!(code & 0xff, SQLITE_BUSY | SQLITE_LOCKED))
}
