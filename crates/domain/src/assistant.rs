//! The assistant chat stub: an append-only message log and a two-state
//! machine simulating reply latency.
//!
//! Time is injected through [`Instant`] arguments so the machine stays
//! deterministic under test; the caller's event loop drives
//! [`Assistant::poll`] on its tick.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Simulated inference latency between the user message and the reply.
pub const REPLY_DELAY: Duration = Duration::from_millis(1500);

/// One chat bubble. Immutable once created; the log is append-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub from_user: bool,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(text: String, from_user: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            from_user,
            sent_at: Utc::now(),
        }
    }
}

/// Result of [`Assistant::send`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// User message appended; a reply is now pending.
    Sent,
    /// Input was empty or whitespace-only; nothing appended.
    Empty,
    /// A reply is already pending; the send was rejected and nothing
    /// appended. The caller keeps its draft.
    Busy,
}

#[derive(Debug)]
enum Phase {
    Idle,
    AwaitingReply { due: Instant, prompt: String },
}

/// The assistant screen's state: message log plus pending-reply phase.
///
/// Only one reply can be pending at a time; a send while awaiting is
/// rejected with [`SendOutcome::Busy`].
#[derive(Debug)]
pub struct Assistant {
    messages: Vec<ChatMessage>,
    phase: Phase,
}

impl Assistant {
    /// Starts with the canned welcome message already in the log.
    #[must_use]
    pub fn new(welcome: &str) -> Self {
        Self {
            messages: vec![ChatMessage::new(welcome.to_string(), false)],
            phase: Phase::Idle,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether the typing indicator should show.
    #[must_use]
    pub fn is_typing(&self) -> bool {
        matches!(self.phase, Phase::AwaitingReply { .. })
    }

    /// Appends the user's message and schedules the reply.
    ///
    /// Guards: trimmed-empty input and a pending reply both append nothing.
    pub fn send(&mut self, text: &str, now: Instant) -> SendOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SendOutcome::Empty;
        }
        if self.is_typing() {
            return SendOutcome::Busy;
        }

        self.messages
            .push(ChatMessage::new(trimmed.to_string(), true));
        self.phase = Phase::AwaitingReply {
            due: now + REPLY_DELAY,
            prompt: trimmed.to_string(),
        };
        SendOutcome::Sent
    }

    /// Resolves the pending reply once its deadline has passed. Returns
    /// `true` when a reply was appended on this call.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Phase::AwaitingReply { due, prompt } = &self.phase else {
            return false;
        };
        if now < *due {
            return false;
        }

        let reply = reply_for(prompt);
        self.messages.push(ChatMessage::new(reply, false));
        self.phase = Phase::Idle;
        true
    }
}

/// Deterministic templated reply embedding the lowercased input.
fn reply_for(prompt: &str) -> String {
    format!("Here's what I found about {}...", prompt.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELCOME: &str = "Hi! I'm your financial assistant.";

    #[test]
    fn starts_with_welcome_only() {
        let assistant = Assistant::new(WELCOME);
        assert_eq!(assistant.messages().len(), 1);
        assert!(!assistant.messages()[0].from_user);
        assert!(!assistant.is_typing());
    }

    #[test]
    fn send_appends_one_user_message_and_one_delayed_reply() {
        let mut assistant = Assistant::new(WELCOME);
        let t0 = Instant::now();

        assert_eq!(assistant.send("Budget Analysis", t0), SendOutcome::Sent);
        assert_eq!(assistant.messages().len(), 2);
        assert!(assistant.messages()[1].from_user);
        assert!(assistant.is_typing());

        // Before the deadline nothing resolves.
        assert!(!assistant.poll(t0 + REPLY_DELAY / 2));
        assert_eq!(assistant.messages().len(), 2);

        assert!(assistant.poll(t0 + REPLY_DELAY));
        assert_eq!(assistant.messages().len(), 3);
        let reply = &assistant.messages()[2];
        assert!(!reply.from_user);
        assert_eq!(reply.text, "Here's what I found about budget analysis...");
        assert!(!assistant.is_typing());

        // Polling again appends nothing further.
        assert!(!assistant.poll(t0 + REPLY_DELAY * 2));
        assert_eq!(assistant.messages().len(), 3);
    }

    #[test]
    fn empty_and_whitespace_sends_append_nothing() {
        let mut assistant = Assistant::new(WELCOME);
        let t0 = Instant::now();

        assert_eq!(assistant.send("", t0), SendOutcome::Empty);
        assert_eq!(assistant.send("   \n", t0), SendOutcome::Empty);
        assert_eq!(assistant.messages().len(), 1);
        assert!(!assistant.is_typing());
    }

    #[test]
    fn second_send_while_awaiting_is_rejected() {
        let mut assistant = Assistant::new(WELCOME);
        let t0 = Instant::now();

        assert_eq!(assistant.send("first", t0), SendOutcome::Sent);
        assert_eq!(assistant.send("second", t0), SendOutcome::Busy);
        assert_eq!(assistant.messages().len(), 2);

        assert!(assistant.poll(t0 + REPLY_DELAY));
        // The reply answers the first prompt; the second never entered the log.
        assert_eq!(
            assistant.messages()[2].text,
            "Here's what I found about first..."
        );
    }

    #[test]
    fn input_is_trimmed_before_logging() {
        let mut assistant = Assistant::new(WELCOME);
        let t0 = Instant::now();
        assistant.send("  Saving Tips  ", t0);
        assert_eq!(assistant.messages()[1].text, "Saving Tips");
        assistant.poll(t0 + REPLY_DELAY);
        assert_eq!(
            assistant.messages()[2].text,
            "Here's what I found about saving tips..."
        );
    }
}
