use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// JSON body extractor whose failures render as the standard 400 error envelope
/// instead of actix's plain-text default.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("")
            .to_string();

        Box::pin(async move {
            let trace_id = trace_ctx::trace_id();

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(trace_id = %trace_id, error = %e, "Failed to read request body chunk");
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
                })?;
                body.extend_from_slice(&chunk);
            }

            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                debug!(
                    trace_id = %trace_id,
                    error = %Redacted(&e.to_string()),
                    content_type = %content_type,
                    body_size = body.len(),
                    "JSON parsing failed"
                );
                AppError::bad_request(ErrorCode::BadRequest, classify_json_error(&e))
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

/// Sanitized client-facing description of a serde_json failure.
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        serde_json::error::Category::Syntax => {
            format!("Invalid JSON at line {}", error.line())
        }
        serde_json::error::Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        serde_json::error::Category::Data => {
            // serde names the offending field; drop the position suffix.
            let msg = error.to_string();
            let msg = msg.split(" at line ").next().unwrap_or("wrong types");
            format!("Invalid request body: {msg}")
        }
        serde_json::error::Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct PlayBody {
        pub player_id: i32,
        #[serde(rename = "move")]
        pub mv: String,
    }

    #[test]
    fn syntax_errors_report_line() {
        let error = serde_json::from_str::<PlayBody>(r#"{"player_id": 1, "move": }"#).unwrap_err();
        assert_eq!(classify_json_error(&error), "Invalid JSON at line 1");
    }

    #[test]
    fn truncated_body_is_eof() {
        let error = serde_json::from_str::<PlayBody>(r#"{"player_id": 1"#).unwrap_err();
        assert!(classify_json_error(&error).contains("unexpected end of input"));
    }

    #[test]
    fn wrong_type_names_the_problem_without_position() {
        let error =
            serde_json::from_str::<PlayBody>(r#"{"player_id": "one", "move": "ROCK"}"#).unwrap_err();
        let detail = classify_json_error(&error);
        assert!(detail.starts_with("Invalid request body: invalid type"));
        assert!(!detail.contains("column"));
    }

    #[test]
    fn missing_field_is_named() {
        let error = serde_json::from_str::<PlayBody>(r#"{"player_id": 1}"#).unwrap_err();
        assert_eq!(
            classify_json_error(&error),
            "Invalid request body: missing field `move`"
        );
    }

    #[test]
    fn deref_reaches_inner_value() {
        let body = ValidatedJson(PlayBody {
            player_id: 3,
            mv: "ROCK".into(),
        });
        assert_eq!(body.player_id, 3);
        assert_eq!(body.into_inner().mv, "ROCK");
    }
}
