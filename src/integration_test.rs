#[cfg(test)]
mod integration_tests {
    use crate::clipboard::mock::RecordingClipboard;
    use crate::config::DisplayConfig;
    use crate::confirm::PresetConfirmer;
    use crate::notify::mock::RecordingNotifier;
    use crate::utils::SecureString;
    use crate::{ActionOutcome, ConsoleError, HttpKeyService, KeyListView, KeyService};
    use axum::extract::{Path, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::routing::{delete, get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    const TOKEN: &str = "test-token";
    const SECRET: &str = "Zx8kQ2mN4pR6tV8wY0aC2eG4iK6mO8qS";

    #[derive(Default)]
    struct Backend {
        keys: Vec<Value>,
        requests: Vec<String>,
        next_id: u32,
        rate_limited: bool,
        slow: bool,
    }

    type Shared = Arc<Mutex<Backend>>;

    fn authorized(headers: &HeaderMap) -> bool {
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(|v| v == format!("Bearer {TOKEN}"))
            .unwrap_or(false)
    }

    fn reject(state: &Shared, headers: &HeaderMap) -> Option<Response> {
        if !authorized(headers) {
            return Some(
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "msg": "Missing Authorization Header" })),
                )
                    .into_response(),
            );
        }
        if state.lock().unwrap().rate_limited {
            return Some(
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    [("retry-after", "42")],
                    Json(json!({
                        "error": "Too many requests",
                        "message": "Rate limit exceeded. Please try again later."
                    })),
                )
                    .into_response(),
            );
        }
        None
    }

    async fn list(State(state): State<Shared>, headers: HeaderMap) -> Response {
        state.lock().unwrap().requests.push("GET /api/keys".to_string());
        if let Some(rejection) = reject(&state, &headers) {
            return rejection;
        }
        let slow = state.lock().unwrap().slow;
        if slow {
            tokio::time::sleep(Duration::from_secs(2)).await;
        }
        let keys = state.lock().unwrap().keys.clone();
        Json(json!({ "keys": keys })).into_response()
    }

    async fn create(
        State(state): State<Shared>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Response {
        state.lock().unwrap().requests.push("POST /api/keys".to_string());
        if let Some(rejection) = reject(&state, &headers) {
            return rejection;
        }
        let mut backend = state.lock().unwrap();
        backend.next_id += 1;
        let key = json!({
            "_id": format!("key{}", backend.next_id),
            "user_id": "user1",
            "name": body["name"],
            "key": SECRET,
            "is_active": true,
            "created_at": "Tue, 17 Oct 2023 22:45:02 GMT"
        });
        backend.keys.push(key.clone());
        (StatusCode::CREATED, Json(key)).into_response()
    }

    async fn remove(
        State(state): State<Shared>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Response {
        state
            .lock()
            .unwrap()
            .requests
            .push(format!("DELETE /api/keys/{id}"));
        if let Some(rejection) = reject(&state, &headers) {
            return rejection;
        }
        let mut backend = state.lock().unwrap();
        let before = backend.keys.len();
        backend.keys.retain(|k| k["_id"] != id.as_str());
        if backend.keys.len() == before {
            return (StatusCode::NOT_FOUND, Json(json!({ "error": "API key not found" })))
                .into_response();
        }
        Json(json!({ "message": "API key deleted successfully" })).into_response()
    }

    async fn toggle(
        State(state): State<Shared>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Response {
        state
            .lock()
            .unwrap()
            .requests
            .push(format!("POST /api/keys/{id}/toggle"));
        if let Some(rejection) = reject(&state, &headers) {
            return rejection;
        }
        let mut backend = state.lock().unwrap();
        match backend.keys.iter_mut().find(|k| k["_id"] == id.as_str()) {
            Some(key) => {
                let active = key["is_active"].as_bool().unwrap_or(false);
                key["is_active"] = Value::Bool(!active);
                Json(json!({ "is_active": !active })).into_response()
            }
            None => (StatusCode::NOT_FOUND, Json(json!({ "error": "API key not found" })))
                .into_response(),
        }
    }

    async fn start_backend(backend: Backend) -> (String, Shared) {
        let state: Shared = Arc::new(Mutex::new(backend));
        let app = Router::new()
            .route("/api/keys", get(list).post(create))
            .route("/api/keys/{id}", delete(remove))
            .route("/api/keys/{id}/toggle", post(toggle))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}"), state)
    }

    fn seeded() -> Backend {
        Backend {
            keys: vec![json!({
                "_id": "seed1",
                "user_id": "user1",
                "name": "Production Key",
                "key": SECRET,
                "is_active": true,
                "created_at": "2024-02-01T09:30:00.123456"
            })],
            next_id: 1,
            ..Backend::default()
        }
    }

    fn service(base_url: &str, token: Option<&str>) -> HttpKeyService {
        HttpKeyService::new(base_url, token.map(SecureString::from), None).unwrap()
    }

    fn view_over(
        base_url: &str,
        token: Option<&str>,
    ) -> (KeyListView, RecordingNotifier, RecordingClipboard) {
        let notifier = RecordingNotifier::new();
        let clipboard = RecordingClipboard::new();
        let view = KeyListView::new(
            Arc::new(service(base_url, token)),
            Arc::new(notifier.clone()),
            Arc::new(clipboard.clone()),
            DisplayConfig::default(),
        );
        (view, notifier, clipboard)
    }

    #[tokio::test]
    async fn test_list_keys_over_http() {
        let (base_url, _) = start_backend(seeded()).await;

        let keys = service(&base_url, Some(TOKEN)).list_keys().await.unwrap();

        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].id, "seed1");
        assert_eq!(keys[0].name, "Production Key");
        assert_eq!(keys[0].key.expose(), SECRET);
        assert!(keys[0].is_active);
    }

    #[tokio::test]
    async fn test_full_session_refetches_after_every_mutation() {
        let (base_url, state) = start_backend(seeded()).await;
        let (mut view, notifier, clipboard) = view_over(&base_url, Some(TOKEN));

        assert_eq!(view.fetch_keys().await, ActionOutcome::Completed);

        view.open_create_form();
        view.set_key_name("CI Key");
        assert_eq!(view.handle_create().await, ActionOutcome::Completed);
        assert_eq!(view.keys().len(), 2);

        assert_eq!(view.handle_toggle("key2").await, ActionOutcome::Completed);
        assert!(!view.find_key("key2").unwrap().is_active);

        assert_eq!(view.copy_key("key2").await, ActionOutcome::Completed);
        assert_eq!(clipboard.writes(), vec![SECRET.to_string()]);

        assert_eq!(
            view.handle_delete("seed1", &PresetConfirmer(true)).await,
            ActionOutcome::Completed
        );
        assert_eq!(view.keys().len(), 1);
        assert!(view.render().contains("CI Key"));
        assert!(view.render().contains("Inactive"));

        assert_eq!(
            state.lock().unwrap().requests,
            vec![
                "GET /api/keys",
                "POST /api/keys",
                "GET /api/keys",
                "POST /api/keys/key2/toggle",
                "GET /api/keys",
                "DELETE /api/keys/seed1",
                "GET /api/keys",
            ]
        );
        assert!(notifier.errors().is_empty());
        assert_eq!(notifier.successes().len(), 4);
    }

    #[tokio::test]
    async fn test_missing_token_collapses_to_fetch_failure() {
        let (base_url, _) = start_backend(seeded()).await;

        let err = service(&base_url, None).list_keys().await.unwrap_err();
        assert_eq!(err.status(), Some(401));

        let (mut view, notifier, _) = view_over(&base_url, None);
        assert_eq!(view.fetch_keys().await, ActionOutcome::Failed);
        assert!(view.keys().is_empty());
        assert_eq!(notifier.errors(), vec!["Failed to fetch API keys".to_string()]);
    }

    #[tokio::test]
    async fn test_backend_errors_keep_their_detail_for_logs() {
        let (base_url, state) = start_backend(seeded()).await;
        let svc = service(&base_url, Some(TOKEN));

        match svc.delete_key("missing").await {
            Err(ConsoleError::Request { status, message }) => {
                assert_eq!(status, Some(404));
                assert!(message.contains("API key not found"));
            }
            other => panic!("expected request error, got {other:?}"),
        }

        state.lock().unwrap().rate_limited = true;
        match svc.toggle_key("seed1").await {
            Err(ConsoleError::Request { status, message }) => {
                assert_eq!(status, Some(429));
                assert!(message.contains("Rate limit exceeded"));
            }
            other => panic!("expected request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_list_untouched() {
        let (base_url, state) = start_backend(seeded()).await;
        let (mut view, notifier, _) = view_over(&base_url, Some(TOKEN));
        view.fetch_keys().await;

        let outcome = view.handle_delete("missing", &PresetConfirmer(true)).await;

        assert_eq!(outcome, ActionOutcome::Failed);
        assert_eq!(view.keys().len(), 1);
        assert_eq!(notifier.errors(), vec!["Failed to delete API key".to_string()]);
        assert_eq!(
            state.lock().unwrap().requests,
            vec!["GET /api/keys", "DELETE /api/keys/missing"]
        );
    }

    #[tokio::test]
    async fn test_timeout_is_a_request_failure() {
        let (base_url, state) = start_backend(seeded()).await;
        state.lock().unwrap().slow = true;

        let svc = HttpKeyService::new(
            &base_url,
            Some(SecureString::from(TOKEN)),
            Some(Duration::from_millis(200)),
        )
        .unwrap();

        assert!(matches!(
            svc.list_keys().await,
            Err(ConsoleError::Request { .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_request_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let svc = service(&format!("http://{addr}"), Some(TOKEN));
        assert!(matches!(
            svc.list_keys().await,
            Err(ConsoleError::Request { status: None, .. })
        ));
    }
}
