//! PostgreSQL implementation of the lookup log repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::lookup_event::LookupEvent;
use crate::domain::repositories::LookupLogRepository;
use crate::error::AppError;

/// PostgreSQL repository for the tracking lookup audit log.
pub struct PgLookupLogRepository {
    pool: Arc<PgPool>,
}

impl PgLookupLogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LookupLogRepository for PgLookupLogRepository {
    async fn record(&self, event: LookupEvent) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO tracking_logs (tracking_number, ip_address, user_agent)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&event.tracking_number)
        .bind(event.ip_or_unknown())
        .bind(event.user_agent_or_unknown())
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
