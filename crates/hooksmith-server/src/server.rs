use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use hooksmith_core::client::GENERATE_HOOKS_PATH;
use hooksmith_core::error::{GENERATION_FAILURE_MESSAGE, MISSING_FIELD_MESSAGE};
use hooksmith_core::{HookProvider, HookRequest, HookService};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub struct HookServer<P: HookProvider> {
    service: Arc<HookService<P>>,
}

impl<P: HookProvider + 'static> HookServer<P> {
    pub fn new(service: HookService<P>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Bind `addr` (e.g. `127.0.0.1:3000`) and serve until the process exits.
    pub async fn start(self, addr: &str) -> std::io::Result<()> {
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener.
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        let addr = listener.local_addr()?;
        info!(
            "Hook endpoint available at http://{}{} (provider: {})",
            addr,
            GENERATE_HOOKS_PATH,
            self.service.provider_name()
        );
        axum::serve(listener, router(self.service)).await
    }
}

pub fn router<P: HookProvider + 'static>(service: Arc<HookService<P>>) -> Router {
    Router::new()
        .route(GENERATE_HOOKS_PATH, post(generate_hooks::<P>))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn generate_hooks<P: HookProvider + 'static>(
    State(service): State<Arc<HookService<P>>>,
    body: Bytes,
) -> Response {
    // Bodies that are not a JSON object of optional strings count as missing fields.
    let Ok(request) = serde_json::from_slice::<HookRequest>(&body) else {
        return missing_field();
    };

    match service.generate(&request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) if e.is_generation_failure() => {
            error!("Failed to generate hooks: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILURE_MESSAGE).into_response()
        }
        Err(_) => missing_field(),
    }
}

fn missing_field() -> Response {
    (StatusCode::BAD_REQUEST, MISSING_FIELD_MESSAGE).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hooksmith_core::{HookForm, HttpHookClient, MockProvider};
    use serde_json::{json, Value};

    const SOURDOUGH_REPLY: &str = "(Curiosity): Ever wonder why your bread flops?\n(Benefit-Driven): Bake perfect sourdough in 3 steps.\n\n(FOMO): Moms everywhere are switching — don't be last.";

    async fn spawn_server(provider: Arc<MockProvider>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = HookServer::new(HookService::new(provider));
        tokio::spawn(server.serve(listener));
        format!("http://{}", addr)
    }

    async fn post_raw(base: &str, body: impl Into<reqwest::Body>) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}{}", base, GENERATE_HOOKS_PATH))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_generate_hooks_ok() {
        let provider = Arc::new(MockProvider::new().with_reply(SOURDOUGH_REPLY));
        let base = spawn_server(provider.clone()).await;

        let body = json!({
            "productDescription": "An online sourdough baking course",
            "targetAudience": "busy moms",
        });
        let response = post_raw(&base, body.to_string()).await;

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"].to_str().unwrap(),
            "application/json"
        );
        let value: Value = response.json().await.unwrap();
        assert_eq!(
            value,
            json!({
                "hooks": [
                    "(Curiosity): Ever wonder why your bread flops?",
                    "(Benefit-Driven): Bake perfect sourdough in 3 steps.",
                    "(FOMO): Moms everywhere are switching — don't be last.",
                ]
            })
        );
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_reply_is_still_ok() {
        let provider = Arc::new(MockProvider::new().with_reply(""));
        let base = spawn_server(provider).await;

        let body = json!({ "productDescription": "A standing desk", "targetAudience": "remote workers" });
        let response = post_raw(&base, body.to_string()).await;

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let value: Value = response.json().await.unwrap();
        assert_eq!(value, json!({ "hooks": [] }));
    }

    #[tokio::test]
    async fn test_missing_fields_are_rejected_without_provider_call() {
        let provider = Arc::new(MockProvider::new().with_reply(SOURDOUGH_REPLY));
        let base = spawn_server(provider.clone()).await;

        let bodies = [
            json!({ "productDescription": "", "targetAudience": "busy moms" }).to_string(),
            json!({ "productDescription": "A course" }).to_string(),
            json!({ "productDescription": "A course", "targetAudience": null }).to_string(),
            json!({}).to_string(),
            json!({ "productDescription": 42, "targetAudience": "busy moms" }).to_string(),
            "not json".to_string(),
        ];

        for body in bodies {
            let response = post_raw(&base, body).await;
            assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
            assert_eq!(response.text().await.unwrap(), MISSING_FIELD_MESSAGE);
        }
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_is_server_error() {
        let provider = Arc::new(MockProvider::new().failing("quota exceeded"));
        let base = spawn_server(provider.clone()).await;

        let body = json!({ "productDescription": "A standing desk", "targetAudience": "remote workers" });
        let response = post_raw(&base, body.to_string()).await;

        assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        let text = response.text().await.unwrap();
        assert_eq!(text, GENERATION_FAILURE_MESSAGE);
        assert!(serde_json::from_str::<Value>(&text).map_or(true, |v| v.get("hooks").is_none()));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_form_round_trip_through_server() {
        let provider = Arc::new(MockProvider::new().with_reply(SOURDOUGH_REPLY));
        let base = spawn_server(provider).await;
        let client = HttpHookClient::new(&base);

        let mut form = HookForm::new();
        form.product_description = "An online sourdough baking course".into();
        form.target_audience = "busy moms".into();

        assert!(form.submit(&client).await);
        assert!(form.error.is_empty());
        assert_eq!(form.hooks.len(), 3);
        assert_eq!(form.hooks[1], "(Benefit-Driven): Bake perfect sourdough in 3 steps.");
    }

    #[tokio::test]
    async fn test_form_shows_generic_error_on_server_failure() {
        let provider = Arc::new(MockProvider::new().failing("upstream down"));
        let base = spawn_server(provider).await;
        let client = HttpHookClient::new(&base);

        let mut form = HookForm::new();
        form.product_description = "A standing desk".into();
        form.target_audience = "remote workers".into();

        assert!(form.submit(&client).await);
        assert_eq!(form.error, "Something went wrong. Please try again.");
        assert!(form.hooks.is_empty());
    }
}
