//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// The store owns all concurrency control: short code uniqueness is
/// enforced by a database constraint and click increments are a single
/// atomic update. The service layer performs no additional locking.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the short code is already taken
    /// (unique constraint). Returns [`AppError::Internal`] on other
    /// database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a live link by its short code.
    ///
    /// Expired records are treated as absent even if not yet purged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_live_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a live link by its original URL and owner identity.
    ///
    /// An anonymous lookup (`owner_id = None`) matches only records with
    /// no owner, never an arbitrary owner's record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_url_and_owner(
        &self,
        original_url: &str,
        owner_id: Option<String>,
    ) -> Result<Option<Link>, AppError>;

    /// Returns true if any record holds the code, live or expired.
    ///
    /// Used as the collision probe during code generation. Expired rows
    /// count as taken until the sweeper removes them, because the unique
    /// constraint would still reject an insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn code_exists(&self, short_code: &str) -> Result<bool, AppError>;

    /// Atomically increments the click counter for a live link.
    ///
    /// Returns `Ok(true)` if a row was updated, `Ok(false)` if the code
    /// has no live record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, short_code: &str) -> Result<bool, AppError>;

    /// Deletes all records whose expiry time has passed.
    ///
    /// Returns the number of purged rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_expired(&self) -> Result<u64, AppError>;
}
