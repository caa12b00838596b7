use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub expires_at: Instant,
}

/// Bandeau de notification unique : un nouveau message remplace l'ancien.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    current: Option<Notification>,
    duration: Duration,
}

impl NotificationCenter {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(Notification {
            message: message.into(),
            expires_at: now + self.duration,
        });
    }

    /// Message visible à `now`, retiré une fois expiré.
    pub fn current(&mut self, now: Instant) -> Option<&str> {
        if self
            .current
            .as_ref()
            .is_some_and(|n| now >= n.expires_at)
        {
            self.current = None;
        }
        self.current.as_ref().map(|n| n.message.as_str())
    }
}
