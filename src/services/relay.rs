// src/services/relay.rs
use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};

use crate::message::ChatMessage;

const GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
const MODEL: &str = "llama3-8b-8192";

const SYSTEM_PROMPT: &str = "You are an expert courier assistant. \
Answer questions about package tracking, delivery schedules, pricing, and customer support. \
Be polite, helpful, and do not answer unrelated questions.";

pub const UNAVAILABLE_REPLY: &str = "I'm sorry, the chatbot service is currently unavailable. \
Please try again later or contact support.";
pub const TROUBLE_REPLY: &str = "I'm sorry, I'm having trouble processing your request right now. \
Please try again later.";

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: String,
}

/// Outbound boundary to the chat-completion provider. Constructed once at
/// startup and injected through `AppState`; without a credential it runs
/// disabled and answers with a fixed fallback.
#[derive(Clone, Debug)]
pub struct ChatRelay {
    http: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl ChatRelay {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            endpoint: GROQ_ENDPOINT.to_string(),
        }
    }

    /// Point the relay at another OpenAI-compatible host.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Relay a transcript to the provider and return the reply text.
    /// Never fails: provider errors collapse to a fixed apology so the
    /// request cycle cannot crash on upstream state.
    pub async fn complete(&self, transcript: &[ChatMessage]) -> String {
        let Some(api_key) = &self.api_key else {
            return UNAVAILABLE_REPLY.to_string();
        };
        match self.request(api_key, transcript).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!("chat completion failed: {err:#}");
                TROUBLE_REPLY.to_string()
            }
        }
    }

    async fn request(&self, api_key: &str, transcript: &[ChatMessage]) -> anyhow::Result<String> {
        let mut messages = Vec::with_capacity(transcript.len() + 1);
        messages.push(ChatMessage::system(SYSTEM_PROMPT));
        messages.extend_from_slice(transcript);

        let body = CompletionRequest {
            model: MODEL,
            messages,
        };

        let response: CompletionResponse = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .context("provider request failed")?
            .error_for_status()
            .context("provider returned an error status")?
            .json()
            .await
            .context("provider response was not valid JSON")?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("provider returned no choices"))?;
        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_relay_returns_unavailable_reply() {
        let relay = ChatRelay::new(None);
        assert!(!relay.enabled());
        let reply = relay.complete(&[ChatMessage::user("hello")]).await;
        assert_eq!(reply, UNAVAILABLE_REPLY);
    }

    #[tokio::test]
    async fn unreachable_provider_returns_trouble_reply() {
        // Nothing listens on this port; the request fails fast.
        let relay = ChatRelay::new(Some("test-key".to_string()))
            .with_endpoint("http://127.0.0.1:9/chat/completions");
        let reply = relay.complete(&[ChatMessage::user("hello")]).await;
        assert_eq!(reply, TROUBLE_REPLY);
    }
}
