// src/routes/chat.rs
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
    response::Html,
};
use anyhow::Context;

use crate::{
    error::AppError,
    message::{ChatMessage, ChatRequest, ChatResponse},
    state::SharedState,
};

/// Cookie tying a browser to its transcript. One cookie, one session.
pub const SESSION_COOKIE: &str = "courier_session";

const INDEX_PAGE: &str = "public/index.html";

/// GET /. Serves the landing page and resets the transcript on every
/// render; a returning visitor always starts a fresh conversation.
pub async fn home_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<([(header::HeaderName, String); 1], Html<String>), AppError> {
    let session_id = match session_from_headers(&headers) {
        Some(sid) => sid,
        None => state.sessions.create_session().await,
    };
    state.sessions.reset_transcript(&session_id).await;

    let page = tokio::fs::read_to_string(INDEX_PAGE)
        .await
        .with_context(|| format!("failed to read {INDEX_PAGE}"))?;

    Ok(([(header::SET_COOKIE, session_cookie(&session_id))], Html(page)))
}

/// POST /get. Records the user turn, relays the whole transcript and
/// records the assistant turn. The relay never fails, so neither does
/// this path beyond the empty-message check.
pub async fn chat_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<ChatRequest>,
) -> Result<([(header::HeaderName, String); 1], Json<ChatResponse>), AppError> {
    let trimmed = payload.message.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    let session_id = match session_from_headers(&headers) {
        Some(sid) => state.sessions.ensure_session(&sid).await,
        None => state.sessions.create_session().await,
    };

    state
        .sessions
        .append_message(&session_id, ChatMessage::user(trimmed))
        .await;
    let transcript = state.sessions.get_transcript(&session_id).await;
    let reply = state.relay.complete(&transcript).await;
    state
        .sessions
        .append_message(&session_id, ChatMessage::assistant(reply.clone()))
        .await;

    Ok((
        [(header::SET_COOKIE, session_cookie(&session_id))],
        Json(ChatResponse { response: reply }),
    ))
}

fn session_from_headers(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
    })
}

fn session_cookie(session_id: &str) -> String {
    format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn parses_session_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; courier_session=abc-123; lang=en"),
        );
        assert_eq!(session_from_headers(&headers).as_deref(), Some("abc-123"));
    }

    #[test]
    fn missing_cookie_yields_none() {
        let headers = HeaderMap::new();
        assert_eq!(session_from_headers(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(session_from_headers(&headers), None);
    }
}
