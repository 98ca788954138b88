//! Mapping of non-success HTTP responses onto [`AdminError`].

use crate::error::AdminError;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::Deserialize;

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Classify a non-success response.
///
/// `context` names what the request was about (e.g. `team 'devs' in 'acme'`)
/// and is prefixed to the message GitHub returned.
pub fn error_for_status(
    status: StatusCode,
    headers: &HeaderMap,
    body: &str,
    context: &str,
) -> AdminError {
    let detail = format!("{} ({}: {})", context, status.as_u16(), api_message(body));

    if is_rate_limited(status, headers) {
        return AdminError::RateLimit {
            message: detail,
            reset_at: header_i64(headers, "x-ratelimit-reset"),
        };
    }

    match status {
        StatusCode::UNAUTHORIZED => AdminError::Authentication(detail),
        StatusCode::NOT_FOUND => AdminError::NotFound(detail),
        StatusCode::FORBIDDEN | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            AdminError::PermissionConflict(detail)
        }
        _ => AdminError::Api(detail),
    }
}

fn is_rate_limited(status: StatusCode, headers: &HeaderMap) -> bool {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return true;
    }
    status == StatusCode::FORBIDDEN
        && (header_i64(headers, "x-ratelimit-remaining") == Some(0)
            || headers.contains_key("retry-after"))
}

fn header_i64(headers: &HeaderMap, name: &str) -> Option<i64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// The `message` field of a GitHub error body, or the raw body.
fn api_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "no response body".to_string();
    }
    match serde_json::from_str::<ErrorBody>(trimmed) {
        Ok(ErrorBody {
            message: Some(message),
        }) => message,
        Ok(_) => "Unknown error".to_string(),
        Err(_) => trimmed.chars().take(200).collect(),
    }
}
