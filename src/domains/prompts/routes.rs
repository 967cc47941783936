//! HTTP routes for the prompts resource.
//!
//! | Method | Path            | Auth   | Success                 |
//! |--------|-----------------|--------|-------------------------|
//! | GET    | `/prompts`      | none   | 200 `{"prompts": [..]}` |
//! | POST   | `/prompts`      | bearer | 201 `{"prompt": {..}}`  |
//! | DELETE | `/prompts/{id}` | bearer | 204                     |
//! | PATCH  | `/prompts/{id}` | bearer | 204                     |
//!
//! Handlers authenticate before looking at the body, so a bad token always
//! wins over a bad payload.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    routing::{get, patch},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::model::{Prompt, PromptFields};
use super::service::PromptService;
use crate::core::Result;
use crate::core::security::bearer_token;

/// `{"prompt": ...}` request and response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct PromptBody<T> {
    pub prompt: T,
}

/// `{"prompts": [...]}` response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct PromptList {
    pub prompts: Vec<Prompt>,
}

/// Build the prompts router.
pub fn router(service: Arc<PromptService>) -> Router {
    Router::new()
        .route("/prompts", get(list_prompts).post(create_prompt))
        .route("/prompts/{id}", patch(update_prompt).delete(delete_prompt))
        .with_state(service)
}

async fn list_prompts(State(service): State<Arc<PromptService>>) -> Result<Json<PromptList>> {
    let prompts = service.list_prompts().await?;
    Ok(Json(PromptList { prompts }))
}

async fn create_prompt(
    State(service): State<Arc<PromptService>>,
    headers: HeaderMap,
    body: std::result::Result<Json<PromptBody<PromptFields>>, JsonRejection>,
) -> Result<(StatusCode, Json<PromptBody<Prompt>>)> {
    let caller = service.authenticate(bearer_token(&headers)).await?;
    let Json(body) = body?;

    let prompt = service.create_prompt(&caller, body.prompt).await?;
    Ok((StatusCode::CREATED, Json(PromptBody { prompt })))
}

async fn delete_prompt(
    State(service): State<Arc<PromptService>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let caller = service.authenticate(bearer_token(&headers)).await?;
    service.delete_prompt(&caller, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn update_prompt(
    State(service): State<Arc<PromptService>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: std::result::Result<Json<PromptBody<PromptFields>>, JsonRejection>,
) -> Result<StatusCode> {
    let caller = service.authenticate(bearer_token(&headers)).await?;
    let Json(body) = body?;

    service.update_prompt(&caller, &id, body.prompt).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::security::{Identity, StaticTokenAuthenticator};
    use crate::domains::prompts::model::NewPrompt;
    use crate::domains::prompts::sanitize::RemoveBlanks;
    use crate::domains::prompts::store::{MemoryPromptStore, PromptStore};
    use axum::body::Body;
    use axum::http::{Request, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    struct Harness {
        store: Arc<MemoryPromptStore>,
        app: Router,
    }

    impl Harness {
        fn new() -> Self {
            let store = Arc::new(MemoryPromptStore::new());
            let auth = StaticTokenAuthenticator::new()
                .with_token("token-u1", "U1")
                .with_token("token-u2", "U2");
            let service = PromptService::new(store.clone(), Arc::new(auth), Arc::new(RemoveBlanks));
            Self {
                store,
                app: router(Arc::new(service)),
            }
        }

        async fn seed(&self, owner: &str, title: &str) -> Prompt {
            let fields = json!({ "title": title }).as_object().cloned().unwrap();
            self.store
                .create(NewPrompt::new(Identity::new(owner), fields))
                .await
                .unwrap()
        }

        async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
            let resp = self.app.clone().oneshot(req).await.unwrap();
            let status = resp.status();
            let bytes = resp.into_body().collect().await.unwrap().to_bytes();
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap()
            };
            (status, body)
        }
    }

    fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_list_without_auth_returns_all() {
        let h = Harness::new();
        h.seed("U1", "a").await;
        h.seed("U2", "b").await;
        h.seed("U1", "c").await;

        let (status, body) = h.send(empty_request("GET", "/prompts", None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["prompts"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_create_sets_owner() {
        let h = Harness::new();
        let req = json_request(
            "POST",
            "/prompts",
            Some("token-u1"),
            json!({"prompt": {"title": "x", "owner": "U9"}}),
        );

        let (status, body) = h.send(req).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["prompt"]["owner"], json!("U1"));
        assert_eq!(body["prompt"]["title"], json!("x"));
        assert!(body["prompt"]["_id"].is_string());
    }

    #[tokio::test]
    async fn test_create_without_token_is_unauthorized() {
        let h = Harness::new();
        let req = json_request("POST", "/prompts", None, json!({"prompt": {"title": "x"}}));

        let (status, body) = h.send(req).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["name"], json!("Unauthorized"));
        assert!(h.store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_wins_over_bad_body() {
        let h = Harness::new();
        let req = json_request("POST", "/prompts", Some("forged"), json!({"nope": 1}));

        let (status, _) = h.send(req).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_without_prompt_field_is_rejected() {
        let h = Harness::new();
        let req = json_request("POST", "/prompts", Some("token-u1"), json!({"title": "x"}));

        let (status, body) = h.send(req).await;

        assert!(status.is_client_error());
        assert_eq!(body["error"]["name"], json!("BadRequest"));
    }

    #[tokio::test]
    async fn test_delete_by_owner() {
        let h = Harness::new();
        let prompt = h.seed("U1", "x").await;

        let uri = format!("/prompts/{}", prompt.id);
        let (status, body) = h.send(empty_request("DELETE", &uri, Some("token-u1"))).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);
        assert!(h.store.find_by_id(&prompt.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_by_other_user_is_forbidden() {
        let h = Harness::new();
        let prompt = h.seed("U1", "x").await;

        let uri = format!("/prompts/{}", prompt.id);
        let (status, body) = h.send(empty_request("DELETE", &uri, Some("token-u2"))).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["name"], json!("Forbidden"));
        assert_eq!(h.store.find_by_id(&prompt.id).await.unwrap(), Some(prompt));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let h = Harness::new();

        let (status, body) = h
            .send(empty_request("DELETE", "/prompts/missing", Some("token-u1")))
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["name"], json!("NotFound"));
    }

    #[tokio::test]
    async fn test_patch_ignores_owner() {
        let h = Harness::new();
        let prompt = h.seed("U1", "x").await;

        let uri = format!("/prompts/{}", prompt.id);
        let req = json_request(
            "PATCH",
            &uri,
            Some("token-u1"),
            json!({"prompt": {"owner": "U3", "title": "y"}}),
        );
        let (status, _) = h.send(req).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        let stored = h.store.find_by_id(&prompt.id).await.unwrap().unwrap();
        assert_eq!(stored.owner, Identity::new("U1"));
        assert_eq!(stored.fields["title"], json!("y"));
    }

    #[tokio::test]
    async fn test_patch_by_other_user_is_forbidden() {
        let h = Harness::new();
        let prompt = h.seed("U1", "x").await;

        let uri = format!("/prompts/{}", prompt.id);
        let req = json_request("PATCH", &uri, Some("token-u2"), json!({"prompt": {"title": "y"}}));
        let (status, _) = h.send(req).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(h.store.find_by_id(&prompt.id).await.unwrap(), Some(prompt));
    }

    #[tokio::test]
    async fn test_delete_without_token_is_unauthorized() {
        let h = Harness::new();
        let prompt = h.seed("U1", "x").await;

        let uri = format!("/prompts/{}", prompt.id);
        let (status, body) = h.send(empty_request("DELETE", &uri, None)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["name"], json!("Unauthorized"));
        assert_eq!(h.store.find_by_id(&prompt.id).await.unwrap(), Some(prompt));
    }

    #[tokio::test]
    async fn test_patch_with_unknown_token_is_unauthorized() {
        let h = Harness::new();
        let prompt = h.seed("U1", "x").await;

        let uri = format!("/prompts/{}", prompt.id);
        let req = json_request("PATCH", &uri, Some("nope"), json!({"prompt": {"title": "y"}}));
        let (status, body) = h.send(req).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["name"], json!("Unauthorized"));
        assert_eq!(h.store.find_by_id(&prompt.id).await.unwrap(), Some(prompt));
    }

    #[tokio::test]
    async fn test_patch_missing_is_not_found() {
        let h = Harness::new();
        let req = json_request(
            "PATCH",
            "/prompts/missing",
            Some("token-u1"),
            json!({"prompt": {"title": "y"}}),
        );

        let (status, _) = h.send(req).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
