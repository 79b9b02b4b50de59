//! Chat page - View Model

use contracts::api::QueryResponse;
use contracts::chat::Message;
use leptos::prelude::*;

/// Fixed reply appended to the transcript when a query fails. The real error
/// detail only surfaces in a transient toast, never in the transcript.
pub const FALLBACK_REPLY: &str =
    "I apologize, but I encountered an error processing your request. Please try again.";

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub messages: RwSignal<Vec<Message>>,
    pub input: RwSignal<String>,
    pub is_loading: RwSignal<bool>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            input: RwSignal::new(String::new()),
            is_loading: RwSignal::new(false),
        }
    }
}

impl Default for ChatVm {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a query outcome to the assistant entry to append, plus an optional toast
/// message. Exactly one assistant entry per accepted user message, so the
/// transcript always grows in pairs.
pub fn reply_from_result(outcome: Result<QueryResponse, String>) -> (Message, Option<String>) {
    match outcome {
        Ok(resp) => match resp.answer() {
            Some(answer) => (Message::assistant(answer), None),
            None => (
                Message::assistant(FALLBACK_REPLY),
                Some("No response received".to_string()),
            ),
        },
        Err(e) => (Message::assistant(FALLBACK_REPLY), Some(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_answer_is_appended_verbatim() {
        let outcome = Ok(QueryResponse {
            result: Some("The conclusion is X.".to_string()),
        });
        let (reply, toast) = reply_from_result(outcome);
        assert!(reply.is_assistant());
        assert_eq!(reply.content, "The conclusion is X.");
        assert!(toast.is_none());
    }

    #[test]
    fn missing_answer_yields_fallback_and_toast() {
        let (reply, toast) = reply_from_result(Ok(QueryResponse { result: None }));
        assert_eq!(reply.content, FALLBACK_REPLY);
        assert_eq!(toast.as_deref(), Some("No response received"));

        let (reply, _) = reply_from_result(Ok(QueryResponse {
            result: Some(String::new()),
        }));
        assert_eq!(reply.content, FALLBACK_REPLY);
    }

    #[test]
    fn transport_error_yields_fallback_with_detail_in_toast() {
        let (reply, toast) = reply_from_result(Err("server down".to_string()));
        assert!(reply.is_assistant());
        assert_eq!(reply.content, FALLBACK_REPLY);
        assert_eq!(toast.as_deref(), Some("server down"));
    }
}
