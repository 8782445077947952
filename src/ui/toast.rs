//! Single-slot toast notifications.

use std::time::{Duration, Instant};

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastState {
    Hidden,
    Showing { message: String, since: Instant },
}

/// One notification at a time. A new message replaces the visible one and
/// restarts its countdown; nothing is queued.
#[derive(Debug)]
pub struct Toaster {
    state: ToastState,
    duration: Duration,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl Toaster {
    pub fn new(duration: Duration) -> Self {
        Self {
            state: ToastState::Hidden,
            duration,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.state = ToastState::Showing {
            message: message.into(),
            since: now,
        };
    }

    /// The message still on screen at `now`, hiding it once its time is up.
    pub fn visible(&mut self, now: Instant) -> Option<&str> {
        if let ToastState::Showing { since, .. } = &self.state {
            if now.saturating_duration_since(*since) >= self.duration {
                self.state = ToastState::Hidden;
            }
        }
        match &self.state {
            ToastState::Showing { message, .. } => Some(message),
            ToastState::Hidden => None,
        }
    }

    pub fn state(&self) -> &ToastState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_after_duration() {
        let start = Instant::now();
        let mut toaster = Toaster::new(Duration::from_secs(3));
        toaster.show("Prompt deleted", start);

        assert_eq!(toaster.visible(start + Duration::from_secs(2)), Some("Prompt deleted"));
        assert_eq!(toaster.visible(start + Duration::from_secs(3)), None);
        assert_eq!(toaster.state(), &ToastState::Hidden);
    }

    #[test]
    fn new_message_replaces_and_restarts_countdown() {
        let start = Instant::now();
        let mut toaster = Toaster::new(Duration::from_secs(3));
        toaster.show("Copied to clipboard!", start);
        toaster.show("Prompt saved to library!", start + Duration::from_secs(2));

        assert_eq!(
            toaster.visible(start + Duration::from_secs(4)),
            Some("Prompt saved to library!")
        );
        assert_eq!(toaster.visible(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn starts_hidden() {
        let mut toaster = Toaster::default();
        assert_eq!(toaster.visible(Instant::now()), None);
    }
}
