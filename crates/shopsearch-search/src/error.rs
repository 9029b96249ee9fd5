//! Maps Elasticsearch transport and response failures into [`AppError`].

use shopsearch_core::error::AppError;

/// Convert a reqwest transport failure into a search-engine error.
pub fn map_transport_error(err: reqwest::Error) -> AppError {
    let mut mapped = AppError::search_engine(format!("Elasticsearch request failed: {err}"));
    mapped.source = Some(Box::new(err));
    mapped
}

/// Build a search-engine error from a non-success Elasticsearch response.
///
/// Elasticsearch error bodies look like
/// `{"error": {"type": "...", "reason": "..."}, "status": 400}`; the reason
/// is surfaced when present, otherwise the raw body or the bare status.
pub fn response_error(status: u16, body: &str) -> AppError {
    let reason = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/reason")
                .and_then(|r| r.as_str())
                .map(String::from)
        });

    let detail = match reason {
        Some(reason) => reason,
        None if !body.is_empty() => body.to_string(),
        None => format!("HTTP {status}"),
    };

    AppError::search_engine(format!("Elasticsearch responded {status}: {detail}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopsearch_core::ErrorKind;

    #[test]
    fn reason_is_extracted_from_es_error_body() {
        let err = response_error(
            400,
            r#"{"error":{"type":"mapper_parsing_exception","reason":"failed to parse field [price]"},"status":400}"#,
        );
        assert_eq!(err.kind, ErrorKind::SearchEngine);
        assert!(err.message.contains("failed to parse field [price]"));
    }

    #[test]
    fn raw_body_is_kept_when_not_es_shaped() {
        let err = response_error(502, "bad gateway");
        assert!(err.message.contains("bad gateway"));
    }

    #[test]
    fn empty_body_falls_back_to_status() {
        let err = response_error(503, "");
        assert!(err.message.contains("HTTP 503"));
    }

    #[test]
    fn response_errors_always_classify_as_search_engine() {
        let err = response_error(418, "teapot");
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.public_message(), "Elasticsearch error");
    }
}
