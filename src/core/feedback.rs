use std::time::{Duration, Instant};

pub const DEFAULT_FEEDBACK_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
struct FeedbackEntry {
    message: String,
    /// `None` when the duration runs past what `Instant` can represent.
    deadline: Option<Instant>,
}

/// A single transient message slot. Showing a new message replaces the old
/// one and restarts its deadline.
#[derive(Debug, Clone)]
pub struct Feedback {
    duration: Duration,
    current: Option<FeedbackEntry>,
}

impl Default for Feedback {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK_DURATION)
    }
}

impl Feedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|entry| entry.message.as_str())
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.current.as_ref().and_then(|entry| entry.deadline)
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(FeedbackEntry {
            message: message.into(),
            deadline: now.checked_add(self.duration),
        });
    }

    /// Returns whether a message was visible.
    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Drop the message once its deadline has passed. Returns whether it was dropped.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(FeedbackEntry {
                deadline: Some(deadline),
                ..
            }) if now >= *deadline => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_duration() {
        let start = Instant::now();
        let mut feedback = Feedback::new(Duration::from_secs(3));
        feedback.show("hello", start);

        assert!(!feedback.expire(start + Duration::from_secs(2)));
        assert_eq!(feedback.message(), Some("hello"));
        assert!(feedback.expire(start + Duration::from_secs(3)));
        assert_eq!(feedback.message(), None);
        assert!(!feedback.expire(start + Duration::from_secs(10)));
    }

    #[test]
    fn new_message_restarts_deadline() {
        let start = Instant::now();
        let mut feedback = Feedback::new(Duration::from_secs(3));
        feedback.show("first", start);
        feedback.show("second", start + Duration::from_secs(2));

        assert!(!feedback.expire(start + Duration::from_secs(4)));
        assert_eq!(feedback.message(), Some("second"));
        assert_eq!(feedback.deadline(), Some(start + Duration::from_secs(5)));
    }

    #[test]
    fn unrepresentable_deadline_never_expires() {
        let start = Instant::now();
        let mut feedback = Feedback::new(Duration::from_secs(i64::MAX as u64));
        feedback.show("sticky", start);

        assert_eq!(feedback.deadline(), None);
        assert!(!feedback.expire(start + Duration::from_secs(86_400)));
        assert_eq!(feedback.message(), Some("sticky"));
        assert!(feedback.clear());
    }

    #[test]
    fn clear_reports_visibility() {
        let mut feedback = Feedback::default();
        assert!(!feedback.clear());
        feedback.show("x", Instant::now());
        assert!(feedback.is_visible());
        assert!(feedback.clear());
        assert!(!feedback.is_visible());
    }
}
