use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wallet_auth_service::common::challenge::extract_nonce;
use wallet_auth_service::common::config::ServiceConfig;
use wallet_auth_service::common::error::VerifyError;
use wallet_auth_service::common::nonce::NonceStore;
use wallet_auth_service::common::types::{NonceResponse, VerifyFailure, VerifyRequest, VerifySuccess};
use wallet_auth_service::common::verify::verify_signature;

type SharedNonceStore = Arc<NonceStore>;

// Create a new router with the nonce and verify endpoints
pub fn create_router(nonce_store: SharedNonceStore) -> Router {
    Router::new()
        .route("/nonce", get(handle_nonce_request))
        .route("/verify", post(handle_verify_request))
        .with_state(nonce_store)
}

async fn handle_nonce_request(State(store): State<SharedNonceStore>) -> Json<NonceResponse> {
    let nonce = store.issue().await;
    Json(NonceResponse { nonce })
}

async fn handle_verify_request(
    State(store): State<SharedNonceStore>,
    Json(request): Json<VerifyRequest>,
) -> Response {
    let valid = match verify_signature(&request.address, &request.message, &request.signature) {
        Ok(valid) => valid,
        Err(VerifyError::MalformedInput(reason)) => {
            warn!(%reason, "rejecting malformed verify request");
            return (
                StatusCode::BAD_REQUEST,
                Json(VerifyFailure {
                    error: "Malformed input".to_string(),
                }),
            )
                .into_response();
        }
    };
    if !valid {
        warn!(address = %request.address, "signature did not validate");
        return invalid_signature();
    }

    // Signature first, nonce second: a forged request cannot burn an
    // outstanding nonce.
    let consumed = match extract_nonce(&request.message) {
        Some(nonce) => store.consume(nonce).await,
        None => false,
    };
    if !consumed {
        warn!(address = %request.address, "nonce missing, unknown, expired or replayed");
        return invalid_signature();
    }

    info!(address = %request.address, "wallet authenticated");
    Json(VerifySuccess { success: true }).into_response()
}

fn invalid_signature() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(VerifyFailure {
            error: "Invalid signature".to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    use wallet_auth_service::common::config::{APP_LABEL, SEPOLIA_CHAIN_ID};
    use wallet_auth_service::flow::LoginFlow;
    use wallet_auth_service::test_utils::{signed_verify_request, test_wallet};
    use wallet_auth_service::wallet::ConnectionState;

    fn post_verify(request: &VerifyRequest) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/verify")
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(request).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn nonce_endpoint_returns_fresh_hex() {
        let app = create_router(Arc::new(NonceStore::new(300)));

        let response = app
            .oneshot(Request::builder().uri("/nonce").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let response: NonceResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.nonce.len(), 32);
        assert!(response.nonce.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn verify_accepts_a_valid_signature_over_an_issued_nonce() {
        let store = Arc::new(NonceStore::new(300));
        let nonce = store.issue().await;
        let app = create_router(store);

        let wallet = test_wallet();
        let request = signed_verify_request(APP_LABEL, &wallet, &nonce);

        let response = app.oneshot(post_verify(&request)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let response: VerifySuccess = serde_json::from_slice(&body).unwrap();
        assert!(response.success);
    }

    #[tokio::test]
    async fn verify_rejects_a_wrong_signature_with_401() {
        let store = Arc::new(NonceStore::new(300));
        let nonce = store.issue().await;
        let app = create_router(store);

        let wallet = test_wallet();
        let mut request = signed_verify_request(APP_LABEL, &wallet, &nonce);
        // Syntactically valid 65-byte signature from nobody in particular.
        request.signature = format!("0x{}{}", "11".repeat(64), "1b");

        let response = app.oneshot(post_verify(&request)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let response: VerifyFailure = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.error, "Invalid signature");
    }

    #[tokio::test]
    async fn verify_rejects_a_replayed_nonce() {
        let store = Arc::new(NonceStore::new(300));
        let nonce = store.issue().await;
        let app = create_router(store);

        let wallet = test_wallet();
        let request = signed_verify_request(APP_LABEL, &wallet, &nonce);

        let first = app.clone().oneshot(post_verify(&request)).await.unwrap();
        let second = app.oneshot(post_verify(&request)).await.unwrap();

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::UNAUTHORIZED);
        let body = to_bytes(second.into_body(), usize::MAX).await.unwrap();
        let response: VerifyFailure = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.error, "Invalid signature");
    }

    #[tokio::test]
    async fn verify_rejects_an_unissued_nonce() {
        let app = create_router(Arc::new(NonceStore::new(300)));

        let wallet = test_wallet();
        let request = signed_verify_request(APP_LABEL, &wallet, "abc123");

        let response = app.oneshot(post_verify(&request)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn verify_rejects_malformed_input_with_400() {
        let store = Arc::new(NonceStore::new(300));
        let nonce = store.issue().await;
        let app = create_router(store);

        let wallet = test_wallet();
        let mut request = signed_verify_request(APP_LABEL, &wallet, &nonce);
        request.signature = "0xzz".to_string();

        let response = app.oneshot(post_verify(&request)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let response: VerifyFailure = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.error, "Malformed input");
    }

    #[tokio::test]
    async fn login_flow_completes_against_a_live_router() {
        let store = Arc::new(NonceStore::new(300));
        let app = create_router(store);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let wallet = test_wallet();
        let connection = ConnectionState::Connected {
            address: wallet.address(),
            chain_id: SEPOLIA_CHAIN_ID,
        };
        let flow = LoginFlow::new(format!("http://{addr}"), APP_LABEL);

        flow.login(&connection, &wallet).await.unwrap();

        // The consumed nonce cannot authenticate a second attempt, but a
        // fresh attempt with a fresh nonce can.
        flow.login(&connection, &wallet).await.unwrap();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServiceConfig::from_env();
    let store = Arc::new(NonceStore::new(config.nonce_ttl_secs));
    let app = create_router(store).layer(TraceLayer::new_for_http());

    info!("verifier service listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
