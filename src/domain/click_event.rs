//! Click event passed from the redirect handler to the background worker.

/// A pending click increment for a resolved short code.
///
/// Created in the redirect handler and sent over a bounded channel so the
/// redirect response is never blocked by the counter write. If the queue
/// is full the event is dropped: losing a click count is preferable to
/// losing availability.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub short_code: String,
}

impl ClickEvent {
    /// Creates a click event for a short code.
    pub fn new(short_code: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_event_creation() {
        let event = ClickEvent::new("aB3xY_9z");
        assert_eq!(event.short_code, "aB3xY_9z");

        let cloned = event.clone();
        assert_eq!(cloned.short_code, event.short_code);
    }
}
