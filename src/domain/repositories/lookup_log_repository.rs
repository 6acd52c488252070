//! Repository trait for the lookup request log.

use crate::domain::lookup_event::LookupEvent;
use crate::error::AppError;
use async_trait::async_trait;

/// Write-only repository for recording tracking lookups.
///
/// Used exclusively by the background worker; request handlers never touch it
/// directly, so a logging outage cannot affect tracking responses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LookupLogRepository: Send + Sync {
    /// Records a single lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. Callers are expected
    /// to swallow the failure after retrying.
    async fn record(&self, event: LookupEvent) -> Result<(), AppError>;
}
