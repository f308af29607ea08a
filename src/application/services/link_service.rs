//! Link creation service.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_and_validate;

/// Result of a shorten call, distinguishing a fresh record from a dedup hit.
///
/// The HTTP layer answers 201 for `Created` and 200 for `Existing`.
#[derive(Debug, Clone)]
pub enum ShortenOutcome {
    Created(Link),
    Existing(Link),
}

impl ShortenOutcome {
    /// Returns the underlying link regardless of outcome.
    pub fn link(&self) -> &Link {
        match self {
            ShortenOutcome::Created(link) | ShortenOutcome::Existing(link) => link,
        }
    }
}

/// Service for creating shortened links.
///
/// Handles URL normalization, deduplication per (url, owner) pair, and
/// collision-free code generation. Anonymous links receive an expiry
/// timestamp; owned links persist indefinitely.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    anon_ttl: Duration,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `anon_ttl` is the time-to-live applied to anonymous submissions.
    pub fn new(link_repository: Arc<dyn LinkRepository>, anon_ttl: Duration) -> Self {
        Self {
            link_repository,
            anon_ttl,
        }
    }

    /// Shortens a URL for the given caller identity.
    ///
    /// # Deduplication
    ///
    /// If a live record already maps the normalized URL for the same owner
    /// (including the anonymous "no owner" identity), it is returned
    /// unchanged: no new record, no click reset.
    ///
    /// # Code generation
    ///
    /// Generates a random 8-character code and probes the store; on
    /// collision it regenerates. The code space is large enough that
    /// retries are rare, so the loop runs until a free code is found
    /// rather than against a retry budget. A uniqueness violation raced
    /// in by a concurrent insert re-enters the loop the same way.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty or malformed URL and
    /// [`AppError::Internal`] on store failures.
    pub async fn shorten(
        &self,
        raw_url: &str,
        owner_id: Option<String>,
    ) -> Result<ShortenOutcome, AppError> {
        let normalized_url = normalize_and_validate(raw_url)
            .map_err(|e| AppError::bad_request(e.to_string(), json!({ "url": raw_url })))?;

        if let Some(existing) = self
            .link_repository
            .find_by_url_and_owner(&normalized_url, owner_id.clone())
            .await?
        {
            return Ok(ShortenOutcome::Existing(existing));
        }

        let expires_at = if owner_id.is_some() {
            None
        } else {
            Some(Utc::now() + self.anon_ttl)
        };

        loop {
            let short_code = generate_code();

            if self.link_repository.code_exists(&short_code).await? {
                continue;
            }

            let new_link = NewLink {
                short_code,
                original_url: normalized_url.clone(),
                owner_id: owner_id.clone(),
                expires_at,
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => return Ok(ShortenOutcome::Created(link)),
                // Lost the probe-insert race to a concurrent writer
                // holding the same code; pick a new one.
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn ttl() -> Duration {
        Duration::seconds(600)
    }

    fn sample_link(id: i64, code: &str, url: &str, owner: Option<&str>) -> Link {
        Link {
            id,
            short_code: code.to_string(),
            original_url: url.to_string(),
            owner_id: owner.map(str::to_string),
            clicks: 0,
            created_at: Utc::now(),
            expires_at: owner.is_none().then(|| Utc::now() + ttl()),
        }
    }

    #[tokio::test]
    async fn test_shorten_creates_new_record() {
        let mut repo = MockLinkRepository::new();

        repo.expect_find_by_url_and_owner()
            .withf(|url, owner| url == "https://example.com" && owner.is_none())
            .times(1)
            .returning(|_, _| Ok(None));
        repo.expect_code_exists().times(1).returning(|_| Ok(false));
        repo.expect_create()
            .withf(|new_link| {
                new_link.short_code.len() == 8
                    && new_link.original_url == "https://example.com"
                    && new_link.owner_id.is_none()
                    && new_link.expires_at.is_some()
            })
            .times(1)
            .returning(|n| {
                let mut link = sample_link(1, "ignored0", &n.original_url, None);
                link.short_code = n.short_code;
                link.expires_at = n.expires_at;
                Ok(link)
            });

        let service = LinkService::new(Arc::new(repo), ttl());
        let outcome = service.shorten("example.com", None).await.unwrap();

        let ShortenOutcome::Created(link) = outcome else {
            panic!("expected a created link");
        };
        assert_eq!(link.original_url, "https://example.com");
        assert!(link.expires_at.is_some());
    }

    #[tokio::test]
    async fn test_shorten_owned_link_has_no_expiry() {
        let mut repo = MockLinkRepository::new();

        repo.expect_find_by_url_and_owner()
            .withf(|_, owner| owner.as_deref() == Some("alice"))
            .times(1)
            .returning(|_, _| Ok(None));
        repo.expect_code_exists().times(1).returning(|_| Ok(false));
        repo.expect_create()
            .withf(|n| n.owner_id.as_deref() == Some("alice") && n.expires_at.is_none())
            .times(1)
            .returning(|n| {
                let mut link = sample_link(2, "ignored0", &n.original_url, Some("alice"));
                link.short_code = n.short_code;
                Ok(link)
            });

        let service = LinkService::new(Arc::new(repo), ttl());
        let outcome = service
            .shorten("https://example.com", Some("alice".to_string()))
            .await
            .unwrap();

        assert!(outcome.link().expires_at.is_none());
    }

    #[tokio::test]
    async fn test_shorten_deduplicates_per_owner() {
        let mut repo = MockLinkRepository::new();

        let existing = sample_link(5, "existing", "https://example.com", Some("alice"));
        repo.expect_find_by_url_and_owner()
            .times(1)
            .returning(move |_, _| Ok(Some(existing.clone())));
        repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(repo), ttl());
        let outcome = service
            .shorten("https://example.com", Some("alice".to_string()))
            .await
            .unwrap();

        let ShortenOutcome::Existing(link) = outcome else {
            panic!("expected the existing link");
        };
        assert_eq!(link.id, 5);
        assert_eq!(link.short_code, "existing");
    }

    #[tokio::test]
    async fn test_shorten_rejects_empty_url() {
        let repo = MockLinkRepository::new();
        let service = LinkService::new(Arc::new(repo), ttl());

        let result = service.shorten("", None).await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_shorten_rejects_invalid_url() {
        let repo = MockLinkRepository::new();
        let service = LinkService::new(Arc::new(repo), ttl());

        let result = service.shorten("https://", None).await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_shorten_retries_on_code_collision() {
        let mut repo = MockLinkRepository::new();

        repo.expect_find_by_url_and_owner()
            .times(1)
            .returning(|_, _| Ok(None));

        let probes = AtomicUsize::new(0);
        repo.expect_code_exists()
            .times(3)
            .returning(move |_| Ok(probes.fetch_add(1, Ordering::SeqCst) < 2));
        repo.expect_create().times(1).returning(|n| {
            let mut link = sample_link(7, "ignored0", &n.original_url, None);
            link.short_code = n.short_code;
            link.expires_at = n.expires_at;
            Ok(link)
        });

        let service = LinkService::new(Arc::new(repo), ttl());
        let outcome = service.shorten("https://example.com", None).await.unwrap();

        assert!(matches!(outcome, ShortenOutcome::Created(_)));
    }

    #[tokio::test]
    async fn test_shorten_retries_on_insert_race() {
        let mut repo = MockLinkRepository::new();

        repo.expect_find_by_url_and_owner()
            .times(1)
            .returning(|_, _| Ok(None));
        repo.expect_code_exists().times(2).returning(|_| Ok(false));

        let inserts = AtomicUsize::new(0);
        repo.expect_create().times(2).returning(move |n| {
            if inserts.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(AppError::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": "links_short_code_key" }),
                ))
            } else {
                let mut link = sample_link(8, "ignored0", &n.original_url, None);
                link.short_code = n.short_code;
                link.expires_at = n.expires_at;
                Ok(link)
            }
        });

        let service = LinkService::new(Arc::new(repo), ttl());
        let outcome = service.shorten("https://example.com", None).await.unwrap();

        assert!(matches!(outcome, ShortenOutcome::Created(_)));
    }
}
