//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL record.
///
/// Maps a globally unique short code to its original URL. Anonymous
/// records carry an expiry timestamp; owned records never expire.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    /// Opaque caller identity; `None` for anonymous submissions.
    pub owner_id: Option<String>,
    /// Incremented only by redirect resolution. Never decreases.
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    /// Set if and only if `owner_id` is absent.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
    pub owner_id: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_link(owner_id: Option<&str>, expires_at: Option<DateTime<Utc>>) -> Link {
        Link {
            id: 1,
            short_code: "aB3xY_9z".to_string(),
            original_url: "https://example.com".to_string(),
            owner_id: owner_id.map(str::to_string),
            clicks: 0,
            created_at: Utc::now(),
            expires_at,
        }
    }

    #[test]
    fn test_link_without_expiry_never_expires() {
        let link = sample_link(Some("user_1"), None);
        assert!(!link.is_expired());
    }

    #[test]
    fn test_future_expiry_is_live() {
        let link = sample_link(None, Some(Utc::now() + Duration::minutes(10)));
        assert!(!link.is_expired());
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let link = sample_link(None, Some(Utc::now() - Duration::seconds(1)));
        assert!(link.is_expired());
    }
}
