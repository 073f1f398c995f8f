use thiserror::Error;
use crate::utils::api::Api;
use super::models::{ApiErrorBody, Review, ReviewEnvelope};

pub const REVIEWS_PATH: &str = "/api/reviews";
pub const GENERIC_FETCH_FAILURE: &str = "Failed to fetch reviews";

#[derive(Debug, Error, PartialEq)]
pub enum ReviewFetchError {
    /// The API answered but flagged the request as unsuccessful, or the body
    /// was not a review listing at all.
    #[error("review listing was rejected")]
    Rejected,
    #[error("request failed with status code {status}")]
    Status { status: u16, message: Option<String> },
    #[error("transport error: {0}")]
    Transport(String),
}

impl ReviewFetchError {
    /// Text shown in the panel: server message first, then the transport
    /// message, then the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ReviewFetchError::Rejected => GENERIC_FETCH_FAILURE.to_string(),
            ReviewFetchError::Status { status, message } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Request failed with status code {}", status)),
            ReviewFetchError::Transport(message) if !message.trim().is_empty() => message.clone(),
            ReviewFetchError::Transport(_) => GENERIC_FETCH_FAILURE.to_string(),
        }
    }
}

/// Turn a completed HTTP exchange into the review list or a fetch error.
pub fn interpret_response(status: u16, body: &str) -> Result<Vec<Review>, ReviewFetchError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message);
        return Err(ReviewFetchError::Status { status, message });
    }

    match serde_json::from_str::<ReviewEnvelope>(body) {
        Ok(envelope) if envelope.success => Ok(envelope.data),
        Ok(_) => Err(ReviewFetchError::Rejected),
        Err(e) => {
            log::warn!("Review listing body did not parse: {}", e);
            Err(ReviewFetchError::Rejected)
        }
    }
}

/// Fetch the current review listing. Issues exactly one request.
pub async fn fetch_reviews() -> Result<Vec<Review>, ReviewFetchError> {
    let response = Api::get(REVIEWS_PATH)
        .send()
        .await
        .map_err(|e| ReviewFetchError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ReviewFetchError::Transport(e.to_string()))?;

    gloo_console::log!(format!("Review listing: {} ({} bytes)", status, body.len()));
    interpret_response(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ANN: &str = r#"{"id":1,"customer_name":"Ann","rating":5,"feedback":"Great","video":"a.mp4","video_thumbnail":"a.jpg"}"#;

    #[test]
    fn success_keeps_response_order() {
        let body = format!(
            r#"{{"success":true,"data":[{},{{"id":2,"customer_name":"Bo","rating":4}},{{"id":3,"customer_name":"Cy","rating":3}}]}}"#,
            ANN
        );
        let reviews = interpret_response(200, &body).unwrap();
        let names: Vec<_> = reviews.iter().map(|r| r.customer_name.as_str()).collect();
        assert_eq!(names, ["Ann", "Bo", "Cy"]);
    }

    #[test]
    fn success_with_empty_data_is_not_an_error() {
        assert_eq!(interpret_response(200, r#"{"success":true,"data":[]}"#), Ok(vec![]));
    }

    #[rstest]
    #[case(r#"{"success":false,"data":[]}"#)]
    #[case(r#"{"success":false,"message":"db down"}"#)]
    #[case("<html>oops</html>")]
    #[case("")]
    fn unsuccessful_2xx_uses_generic_message(#[case] body: &str) {
        let err = interpret_response(200, body).unwrap_err();
        assert_eq!(err, ReviewFetchError::Rejected);
        assert_eq!(err.user_message(), GENERIC_FETCH_FAILURE);
    }

    #[test]
    fn error_status_prefers_server_message() {
        let err = interpret_response(503, r#"{"message":"Maintenance in progress"}"#).unwrap_err();
        assert_eq!(err.user_message(), "Maintenance in progress");
    }

    #[rstest]
    #[case(r#"{"error":"x"}"#)]
    #[case(r#"{"message":"   "}"#)]
    #[case("Internal Server Error")]
    fn error_status_without_message_reports_status(#[case] body: &str) {
        let err = interpret_response(500, body).unwrap_err();
        assert_eq!(err.user_message(), "Request failed with status code 500");
    }

    #[rstest]
    #[case("Network Error", "Network Error")]
    #[case("", GENERIC_FETCH_FAILURE)]
    fn transport_message_falls_back(#[case] raw: &str, #[case] shown: &str) {
        assert_eq!(ReviewFetchError::Transport(raw.to_string()).user_message(), shown);
    }
}
