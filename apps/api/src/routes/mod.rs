pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes/parse",
            post(handlers::handle_parse_resume),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tokio::sync::Mutex;
    use tower::util::ServiceExt;

    use crate::ledger::Ledger;

    fn test_state(dir: &tempfile::TempDir) -> AppState {
        let ledger_path = dir.path().join("parsed_resumes.csv");
        AppState {
            ledger: Arc::new(Mutex::new(Ledger::new(ledger_path))),
        }
    }

    fn multipart_body(boundary: &str, parts: &[(&str, Option<&str>, &str)]) -> String {
        let mut body = String::new();
        for (name, filename, content) in parts {
            body.push_str(&format!("--{boundary}\r\n"));
            match filename {
                Some(filename) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                     Content-Type: application/pdf\r\n\r\n"
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                )),
            }
            body.push_str(content);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{boundary}--\r\n"));
        body
    }

    #[tokio::test]
    async fn test_health_endpoint_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(&dir));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_parse_rejects_unreadable_document() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(&dir));

        let boundary = "test-boundary";
        let body = multipart_body(
            boundary,
            &[
                ("file", Some("resume.pdf"), "definitely not a pdf"),
                ("job_field", None, "software"),
            ],
        );

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/resumes/parse")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        // Nothing is stored when extraction fails.
        assert!(!dir.path().join("parsed_resumes.csv").exists());
    }

    #[tokio::test]
    async fn test_parse_requires_file_part() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(&dir));

        let boundary = "test-boundary";
        let body = multipart_body(boundary, &[("job_field", None, "finance")]);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/resumes/parse")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
