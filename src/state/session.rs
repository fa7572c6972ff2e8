//! Chat Session Log
//!
//! Append-only message list for the chat view. Kept free of DOM types so
//! the ordering and input rules can be unit tested off the browser.

use chrono::{DateTime, Utc};

/// Who authored a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// A single chat message. Immutable once appended.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: i64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only log of chat messages.
///
/// There is no deletion or edit capability. Messages are ordered by
/// arrival; ids are timestamp-derived but bumped past the previous id so
/// replies landing in the same millisecond stay unique and ordered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatLog {
    messages: Vec<Message>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message stamped with the current time.
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) -> i64 {
        self.push_at(sender, text, Utc::now())
    }

    /// Append a message with an explicit arrival time.
    pub fn push_at(&mut self, sender: Sender, text: impl Into<String>, now: DateTime<Utc>) -> i64 {
        let id = match self.messages.last() {
            Some(last) => now.timestamp_millis().max(last.id + 1),
            None => now.timestamp_millis(),
        };
        self.messages.push(Message {
            id,
            text: text.into(),
            sender,
            timestamp: now,
        });
        id
    }

    /// Messages in arrival order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Trim user input; `None` means nothing should be sent.
pub fn clean_input(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Synthesized AI message for a file analyzed from the chat toolbar.
pub fn insight_summary(insights: &[String]) -> String {
    format!(
        "Analysis complete! Here are the insights:\n{}",
        insights.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_send_appends_user_then_ai() {
        let mut log = ChatLog::new();
        log.push_at(Sender::User, "Hello", at(1_000));
        log.push_at(Sender::Ai, "Hi there", at(1_250));

        let messages = log.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[0].text, "Hello");
        assert_eq!(messages[1].sender, Sender::Ai);
        assert_eq!(messages[1].text, "Hi there");
    }

    #[test]
    fn test_ids_stay_unique_within_same_millisecond() {
        let mut log = ChatLog::new();
        let first = log.push_at(Sender::User, "one", at(5_000));
        let second = log.push_at(Sender::Ai, "two", at(5_000));
        // Reply arriving "earlier" by clock still orders after by id
        let third = log.push_at(Sender::Ai, "three", at(4_000));

        assert!(second > first);
        assert!(third > second);
    }

    #[test]
    fn test_failed_reply_leaves_user_message_in_place() {
        let mut log = ChatLog::new();
        log.push_at(Sender::User, "Hello", at(1_000));
        // Request failed: no AI message is appended, nothing is rolled back
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0].sender, Sender::User);
    }

    #[test]
    fn test_clean_input_rejects_whitespace_only() {
        assert_eq!(clean_input(""), None);
        assert_eq!(clean_input("   \t\n"), None);
        assert_eq!(clean_input("  hello  "), Some("hello"));
    }

    #[test]
    fn test_insight_summary_lists_lines() {
        let insights = vec!["Rows trend upward".to_string(), "Two outliers".to_string()];
        assert_eq!(
            insight_summary(&insights),
            "Analysis complete! Here are the insights:\nRows trend upward\nTwo outliers"
        );
    }
}
