use std::time::{Duration, Instant};

/// Feedback strip shown above a view. Success banners expire on their own;
/// error banners stay until dismissed or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success { message: String, expires_at: Instant },
    Error { message: String },
}

impl Banner {
    pub fn success(message: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Banner::Success {
            message: message.into(),
            expires_at: now + ttl,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Banner::Error { message: message.into() }
    }

    pub fn message(&self) -> &str {
        match self {
            Banner::Success { message, .. } | Banner::Error { message } => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Banner::Error { .. })
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        match self {
            Banner::Success { expires_at, .. } => now < *expires_at,
            Banner::Error { .. } => true,
        }
    }
}
