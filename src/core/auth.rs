// src/core/auth.rs

//! Boundary adapter for the remote login endpoint.
//!
//! The gateway performs exactly one request per call and never retries. The
//! only local processing is phone-number normalization; everything else is
//! decided by the server's response.

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

/// Used when the server rejects a login without saying why.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Login failed";

static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").unwrap());

#[derive(Debug, Error)]
pub enum AuthError {
    /// The server answered and said no. The message is shown verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Unexpected response from server: {0}")]
    MalformedResponse(String),
}

/// What a successful login returns. The server may attach a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    #[serde(rename = "phoneNumber")]
    phone_number: &'a str,
    password: &'a str,
}

/// Strips everything but ASCII digits, as the phone field does on every edit.
pub fn normalize_phone_number(input: &str) -> String {
    NON_DIGIT.replace_all(input, "").into_owned()
}

/// Decides success or failure from the endpoint's status code and body.
///
/// Success needs both a 2xx status and a `status` field that is not the
/// literal `false`; a missing `status` counts as success. A body that is not
/// JSON is always a failure.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<AuthOutcome, AuthError> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;
    if payload.is_null() {
        return Err(AuthError::MalformedResponse("empty JSON payload".to_string()));
    }

    let message = payload
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_owned);
    let flagged_false = payload.get("status") == Some(&Value::Bool(false));

    if status.is_success() && !flagged_false {
        Ok(AuthOutcome { message })
    } else {
        debug!(%status, flagged_false, "Login rejected by server.");
        Err(AuthError::Rejected(
            message.unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_string()),
        ))
    }
}

/// Sends credentials to the fixed login endpoint.
#[derive(Debug, Clone)]
pub struct AuthGateway {
    client: reqwest::Client,
    endpoint: Url,
}

impl AuthGateway {
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("ZeroIntel/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, endpoint))
    }

    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// One `POST` with a JSON body. No retry, no backoff.
    pub async fn authenticate(&self, identifier: &str, secret: &str) -> Result<AuthOutcome, AuthError> {
        info!(endpoint = %self.endpoint, "Sending login request.");
        let body = serde_json::to_vec(&LoginRequest { phone_number: identifier, password: secret })
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "Login request failed."))?;

        let status = response.status();
        let text = response.text().await?;
        info!(%status, "Received login response.");
        interpret_response(status, &text)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;
    use url::Url;

    /// Serves a single canned HTTP response on a loopback port and hands back
    /// the raw request it received.
    pub(crate) async fn serve_once(status: u16, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let reason = if status < 400 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        let url = Url::parse(&format!("http://{}/api/user/auth/login", addr)).unwrap();
        (url, handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let content_length = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub(crate) fn client() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::test_support::{client, serve_once};
    use pretty_assertions::assert_eq;

    #[test]
    fn phone_numbers_keep_only_digits() {
        assert_eq!(normalize_phone_number("+1 (555) 123-4567"), "15551234567");
        assert_eq!(normalize_phone_number("abc"), "");
    }

    #[test]
    fn explicit_false_status_is_rejection_even_with_200() {
        let err = interpret_response(StatusCode::OK, r#"{"status":false,"message":"bad credentials"}"#)
            .unwrap_err();
        assert!(matches!(err, AuthError::Rejected(_)));
        assert_eq!(err.to_string(), "bad credentials");
    }

    #[test]
    fn missing_status_with_200_is_success() {
        assert_eq!(
            interpret_response(StatusCode::OK, "{}").unwrap(),
            AuthOutcome { message: None }
        );
        assert!(interpret_response(StatusCode::OK, r#"{"status":"ok","message":"hi"}"#).is_ok());
        assert!(interpret_response(StatusCode::CREATED, r#"{"status":true}"#).is_ok());
    }

    #[test]
    fn non_success_status_uses_fallback_message() {
        let err = interpret_response(StatusCode::UNAUTHORIZED, r#"{"status":true}"#).unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_FAILURE_MESSAGE);
        let err = interpret_response(StatusCode::INTERNAL_SERVER_ERROR, r#"{"message":""}"#).unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_FAILURE_MESSAGE);
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = interpret_response(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, AuthError::MalformedResponse(_)));
        let err = interpret_response(StatusCode::OK, "null").unwrap_err();
        assert!(matches!(err, AuthError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn authenticate_posts_json_credentials() {
        let (url, server) = serve_once(200, "{}").await;
        let gateway = AuthGateway::with_client(client(), url);

        let outcome = gateway.authenticate("5551234", "hunter2").await.unwrap();
        assert_eq!(outcome.message, None);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/user/auth/login"));
        assert!(request.to_lowercase().contains("content-type: application/json"));
        assert!(request.contains(r#"{"phoneNumber":"5551234","password":"hunter2"}"#));
    }

    #[tokio::test]
    async fn authenticate_surfaces_server_message() {
        let (url, _server) = serve_once(401, r#"{"message":"account locked"}"#).await;
        let gateway = AuthGateway::with_client(client(), url);
        let err = gateway.authenticate("1", "x").await.unwrap_err();
        assert_eq!(err.to_string(), "account locked");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_error() {
        // bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let url = Url::parse(&format!("http://{}/login", addr)).unwrap();
        let gateway = AuthGateway::with_client(client(), url);
        let err = gateway.authenticate("1", "x").await.unwrap_err();
        assert!(matches!(err, AuthError::Transport(_)));
    }
}
