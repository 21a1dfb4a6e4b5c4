use std::fmt;
use std::time::Duration;

use tokio::time::Instant;

pub const NOTICE_TTL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(Vec<String>),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Success(message) => write!(f, "{message}"),
            Notice::Error(messages) => write!(f, "{}", messages.join(", ")),
        }
    }
}

/// Holds at most one notice and forgets it once its time is up.
#[derive(Debug)]
pub struct NoticeBoard {
    current: Option<(Notice, Instant)>,
    ttl: Duration,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(NOTICE_TTL)
    }
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    /// Replaces whatever was shown and restarts the timer.
    pub fn raise(&mut self, notice: Notice) {
        self.current = Some((notice, Instant::now()));
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current
            .as_ref()
            .filter(|(_, raised_at)| raised_at.elapsed() < self.ttl)
            .map(|(notice, _)| notice)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
