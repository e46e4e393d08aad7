//! Test Event Source Implementation
//!
//! Replays a pre-programmed queue of user events, allowing deterministic
//! runs of the application controller without a terminal.

use super::{EventSource, Screen, UserEvent};
use anyhow::Result;
use std::collections::VecDeque;

/// Event source fed from a queue; an exhausted queue yields [`UserEvent::Quit`]
#[derive(Debug, Clone, Default)]
pub struct TestEventSource {
    events: VecDeque<UserEvent>,
}

impl TestEventSource {
    /// Create a new test event source with an empty event queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a test event source with pre-populated events
    pub fn with_events(events: Vec<UserEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }

    pub fn push_event(&mut self, event: UserEvent) {
        self.events.push_back(event);
    }

    pub fn pending_count(&self) -> usize {
        self.events.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSource for TestEventSource {
    fn next_event(&mut self, _screen: &Screen<'_>) -> Result<UserEvent> {
        Ok(self.events.pop_front().unwrap_or(UserEvent::Quit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::MovieListing;

    #[test]
    fn test_event_source_starts_empty() {
        let source = TestEventSource::new();
        assert!(source.is_exhausted());
        assert_eq!(source.pending_count(), 0);
    }

    #[test]
    fn test_event_source_replays_in_order_then_quits() -> Result<()> {
        let listing = MovieListing::new();
        let screen = Screen::List(&listing);
        let mut source = TestEventSource::with_events(vec![UserEvent::Delete { index: 1 }]);
        source.push_event(UserEvent::Submit);

        assert_eq!(source.pending_count(), 2);
        assert_eq!(source.next_event(&screen)?, UserEvent::Delete { index: 1 });
        assert_eq!(source.next_event(&screen)?, UserEvent::Submit);
        assert_eq!(source.next_event(&screen)?, UserEvent::Quit);
        assert!(source.is_exhausted());
        Ok(())
    }
}
