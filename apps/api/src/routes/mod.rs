pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers::handle_extract_resume;
use crate::jobs::handlers::{handle_match_jobs, handle_search, handle_search_upload};
use crate::matching::handlers::handle_match;
use crate::skills::handlers::handle_extract_skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Single pair scoring
        .route("/api/v1/match", post(handle_match))
        .route("/api/v1/skills/extract", post(handle_extract_skills))
        // Batch scoring
        .route("/api/v1/jobs/match", post(handle_match_jobs))
        .route("/api/v1/jobs/search", post(handle_search))
        .route("/api/v1/jobs/search/upload", post(handle_search_upload))
        // Documents
        .route("/api/v1/resumes/extract", post(handle_extract_resume))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::jobs::models::JobListing;
    use crate::jobs::source::StaticJobSource;

    const BOUNDARY: &str = "sage-test-boundary";

    fn listing(title: &str, description: &str) -> JobListing {
        JobListing {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: description.to_string(),
            link: Some(format!("https://jobs.example.com/{title}")),
        }
    }

    fn app_with_jobs() -> Router {
        let source = StaticJobSource::new(vec![
            listing("Python Developer", "Python developer with AWS and Docker experience."),
            listing("Pastry Chef", "Pastry chef for our bakery."),
            listing("Python Data Engineer", "Python, SQL and Spark pipelines."),
        ]);
        build_router(AppState::new(Config::default(), Some(Arc::new(source))))
    }

    fn app_without_source() -> Router {
        build_router(AppState::new(Config::default(), None))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    enum Part<'a> {
        Text(&'a str, &'a str),
        File(&'a str, &'a str, &'a [u8]),
    }

    fn post_multipart(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
        let mut body = Vec::new();
        for part in parts {
            write!(body, "--{BOUNDARY}\r\n").unwrap();
            match part {
                Part::Text(name, value) => {
                    write!(
                        body,
                        "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                    )
                    .unwrap();
                }
                Part::File(name, file_name, bytes) => {
                    write!(
                        body,
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .unwrap();
                    body.extend_from_slice(bytes);
                    body.extend_from_slice(b"\r\n");
                }
            }
        }
        write!(body, "--{BOUNDARY}--\r\n").unwrap();

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app_without_source()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "sage-api");
    }

    #[tokio::test]
    async fn test_match_pair() {
        let response = app_without_source()
            .oneshot(post_json(
                "/api/v1/match",
                json!({
                    "job_description": "Looking for a Python developer with AWS and Docker experience.",
                    "resume_text": "Experienced Python engineer who has used Docker in production."
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert!(body["similarity_score"].as_f64().unwrap() > 0.0);
        let matched = body["matched_skills"].as_array().unwrap();
        assert!(matched.contains(&json!("python")));
        assert!(matched.contains(&json!("docker")));
        assert!(body["missing_skills"].as_array().unwrap().contains(&json!("aws")));
        assert!(body["tier"].is_string());
    }

    #[tokio::test]
    async fn test_match_rejects_empty_job_description() {
        let response = app_without_source()
            .oneshot(post_json(
                "/api/v1/match",
                json!({ "job_description": "  ", "resume_text": "Rust" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_extract_skills() {
        let response = app_without_source()
            .oneshot(post_json(
                "/api/v1/skills/extract",
                json!({ "text": "I KNOW PYTHON" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["skills"], json!(["python"]));
    }

    #[tokio::test]
    async fn test_match_supplied_jobs_without_resume() {
        let response = app_without_source()
            .oneshot(post_json(
                "/api/v1/jobs/match",
                json!({
                    "jobs": [
                        { "title": "b", "company": "c", "location": "l", "description": "Rust" },
                        { "title": "a", "company": "c", "location": "l", "description": "Go" }
                    ]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["total"], 2);
        assert_eq!(body["summary"]["unscored"], 2);
        assert_eq!(body["jobs"][0]["title"], "b");
        assert_eq!(body["jobs"][0]["match_status"], "unscored");
        assert!(body["search_id"].is_string());
    }

    #[tokio::test]
    async fn test_match_supplied_jobs_with_blank_resume_stays_unscored() {
        let response = app_without_source()
            .oneshot(post_json(
                "/api/v1/jobs/match",
                json!({
                    "jobs": [
                        { "title": "a", "company": "c", "location": "l", "description": "Rust" }
                    ],
                    "resume_text": "   "
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["summary"]["unscored"], 1);
        assert_eq!(body["summary"]["matched"], 0);
        assert_eq!(body["jobs"][0]["match_status"], "unscored");
    }

    #[tokio::test]
    async fn test_search_with_empty_resume_stays_unscored() {
        let response = app_with_jobs()
            .oneshot(post_json(
                "/api/v1/jobs/search",
                json!({ "keyword": "python", "resume_text": "" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["summary"]["unscored"], 2);
        assert_eq!(body["jobs"][0]["match_status"], "unscored");
    }

    #[tokio::test]
    async fn test_search_ranks_by_similarity() {
        let response = app_with_jobs()
            .oneshot(post_json(
                "/api/v1/jobs/search",
                json!({
                    "keyword": "python",
                    "resume_text": "Python developer, AWS and Docker experience"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["keyword"], "python");
        assert_eq!(body["total"], 2);
        assert_eq!(body["jobs"][0]["title"], "Python Developer");
        assert_eq!(body["jobs"][0]["match_status"], "matched");
        assert_eq!(body["summary"]["matched"], 2);
        assert!(body.get("notice").is_none());
    }

    #[tokio::test]
    async fn test_search_rejects_blank_keyword() {
        let response = app_with_jobs()
            .oneshot(post_json("/api/v1/jobs/search", json!({ "keyword": "   " })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Please enter a valid job keyword");
    }

    #[tokio::test]
    async fn test_search_rejects_unknown_filter() {
        let response = app_with_jobs()
            .oneshot(post_json(
                "/api/v1/jobs/search",
                json!({ "keyword": "python", "job_types": ["Gig"] }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_without_results_sets_notice() {
        let response = app_with_jobs()
            .oneshot(post_json("/api/v1/jobs/search", json!({ "keyword": "astronaut" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["total"], 0);
        assert!(body["notice"].is_string());
    }

    #[tokio::test]
    async fn test_search_without_source_is_unavailable() {
        let response = app_without_source()
            .oneshot(post_json("/api/v1/jobs/search", json!({ "keyword": "python" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_upload_search_with_text_resume() {
        let response = app_with_jobs()
            .oneshot(post_multipart(
                "/api/v1/jobs/search/upload",
                &[
                    Part::Text("keyword", "python"),
                    Part::Text("job_type", "Full-time"),
                    Part::File("resume", "cv.txt", b"Python, SQL and Spark pipelines."),
                ],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["warnings"], json!([]));
        assert_eq!(body["jobs"][0]["title"], "Python Data Engineer");
    }

    #[tokio::test]
    async fn test_upload_search_with_unreadable_resume_warns() {
        let response = app_with_jobs()
            .oneshot(post_multipart(
                "/api/v1/jobs/search/upload",
                &[
                    Part::Text("keyword", "python"),
                    Part::File("resume", "cv.docx", b"definitely not a docx"),
                ],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["warnings"].as_array().unwrap().len(), 1);
        assert_eq!(body["summary"]["matched"], 2);
        assert_eq!(body["summary"]["best_score"], 0.0);
        assert_eq!(body["jobs"][0]["matched_skills"], json!([]));
    }

    #[tokio::test]
    async fn test_extract_resume_text() {
        let response = app_without_source()
            .oneshot(post_multipart(
                "/api/v1/resumes/extract",
                &[Part::File("resume", "cv.txt", b"Rust and Kafka")],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["file_name"], "cv.txt");
        assert_eq!(body["file_type"], "txt");
        assert_eq!(body["text"], "Rust and Kafka");
    }

    #[tokio::test]
    async fn test_extract_resume_rejects_unknown_type() {
        let response = app_without_source()
            .oneshot(post_multipart(
                "/api/v1/resumes/extract",
                &[Part::File("resume", "photo.png", b"\x89PNG")],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_body_limit_is_enforced() {
        let config = Config {
            max_upload_bytes: 64,
            ..Config::default()
        };
        let app = build_router(AppState::new(config, None));
        let payload = "x".repeat(1024);
        let response = app
            .oneshot(post_multipart(
                "/api/v1/resumes/extract",
                &[Part::File("resume", "cv.txt", payload.as_bytes())],
            ))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }
}
