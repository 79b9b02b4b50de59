//! In-memory chat model: transcript messages and the per-session navigation state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            _ => Err(format!("Unknown chat role: {}", s)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// A single transcript entry. Never mutated once appended; the transcript is
/// insertion-ordered and discarded when the chat page unmounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    pub fn is_assistant(&self) -> bool {
        self.role == ChatRole::Assistant
    }
}

/// Navigation state carried from a successful upload to the chat route.
///
/// Created exactly once, read-only for the lifetime of the chat page. The chat
/// page redirects home when it is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    pub collection_name: String,
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trip() {
        for role in [ChatRole::User, ChatRole::Assistant] {
            assert_eq!(ChatRole::from_str(role.as_str()), Ok(role));
        }
        assert!(ChatRole::from_str("system").is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ChatRole::Assistant).unwrap(),
            r#""assistant""#
        );
    }

    #[test]
    fn constructors_set_role_and_unique_ids() {
        let question = Message::user("What is the conclusion?");
        let answer = Message::assistant("The conclusion is X.");
        assert_eq!(question.role, ChatRole::User);
        assert!(answer.is_assistant());
        assert_ne!(question.id, answer.id);
        assert_eq!(answer.content, "The conclusion is X.");
    }

    #[test]
    fn session_survives_serde() {
        let session = ChatSession {
            collection_name: "research".to_string(),
            file_name: "paper.pdf".to_string(),
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: ChatSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
