// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Drives `HttpTransport` and `NodeClient` against a local fake node.

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use bitflow_bitcoin_node::{
    Hash256, HttpTransport, NodeClient, NodeClientError, RpcRequest, RpcTransport, TransportError,
    rpc::EnvelopeError,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const RPC_USER: &str = "bitcoinrpc";
const RPC_PASSWORD: &str = "secret";
// base64("bitcoinrpc:secret")
const EXPECTED_AUTH: &str = "Basic Yml0Y29pbnJwYzpzZWNyZXQ=";

const BEST_HASH: &str = "000000000fe549a89848c76070d4132872cfb6efe5315d01d7ef77e4900f2d39";
const UNKNOWN_HASH: &str = "00000000000000000000000000000000000000000000000000000000deadbeef";

#[derive(Clone, Default)]
struct FakeNode {
    bodies: Arc<Mutex<Vec<Value>>>,
}

impl FakeNode {
    fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }
}

fn blockchain_info_result() -> Value {
    json!({
        "chain": "main",
        "blocks": 227252,
        "headers": 227252,
        "bestblockhash": BEST_HASH,
        "difficulty": 1.0,
        "verificationprogress": 1.0,
        "chainwork": "083ada4a4009841a"
    })
}

fn block_header_result() -> Value {
    json!({
        "hash": BEST_HASH,
        "confirmations": 88029,
        "size": 189,
        "height": 227252,
        "version": 2,
        "merkleroot": "c738fb8e22750b6d3511ed0049a96558b0bc57046f3f77771ec825b22d6a6f4a",
        "tx": ["c738fb8e22750b6d3511ed0049a96558b0bc57046f3f77771ec825b22d6a6f4a"],
        "time": 1398824312,
        "nonce": 1883462912,
        "bits": "1d00ffff",
        "difficulty": 1.0,
        "chainwork": "000000000000000000000000000000000000000000000000083ada4a4009841a",
        "previousblockhash": "00000000c7f4990e6ebf71ad7e21a47131dfeb22c759505b3998d7a814c011df",
        "nextblockhash": "00000000afe1928529ac766f1237657819a11cfcc8ca6d67f119e868ed5b6188"
    })
}

fn envelope(status: StatusCode, result: Value, error: Value) -> Response {
    let body = json!({ "result": result, "error": error, "id": null });
    (status, [(header::CONTENT_TYPE, "application/json")], body.to_string()).into_response()
}

/// Mimics bitcoind: 401 without credentials, 500 with an error envelope for
/// RPC-level failures.
async fn rpc_handler(State(node): State<FakeNode>, headers: HeaderMap, body: String) -> Response {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        == Some(EXPECTED_AUTH);
    if !authorized {
        return (StatusCode::UNAUTHORIZED, "").into_response();
    }

    let request: Value = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(_) => {
            return envelope(
                StatusCode::INTERNAL_SERVER_ERROR,
                Value::Null,
                json!({ "code": -32700, "message": "Parse error" }),
            );
        }
    };
    node.bodies.lock().unwrap().push(request.clone());

    match (request["method"].as_str(), request["params"][0].as_str()) {
        (Some("getinfo"), _) => envelope(StatusCode::OK, blockchain_info_result(), Value::Null),
        (Some("getblock"), Some(BEST_HASH)) => {
            envelope(StatusCode::OK, block_header_result(), Value::Null)
        }
        (Some("getblock"), _) => envelope(
            StatusCode::INTERNAL_SERVER_ERROR,
            Value::Null,
            json!({ "code": -5, "message": "Block not found" }),
        ),
        _ => envelope(
            StatusCode::NOT_FOUND,
            Value::Null,
            json!({ "code": -32601, "message": "Method not found" }),
        ),
    }
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_fake_node() -> (String, FakeNode) {
    let node = FakeNode::default();
    let router = Router::new()
        .route("/", post(rpc_handler))
        .with_state(node.clone());
    (serve(router).await, node)
}

fn authed_client(url: &str) -> NodeClient<HttpTransport> {
    let transport = HttpTransport::new(url, Duration::from_secs(5))
        .unwrap()
        .with_basic_auth(RPC_USER, RPC_PASSWORD);
    NodeClient::new(transport)
}

#[tokio::test]
async fn test_get_blockchain_info_over_http() {
    let (url, node) = spawn_fake_node().await;
    let client = authed_client(&url);

    let info = client.get_blockchain_info().await.unwrap();

    assert_eq!(info.chain(), "main");
    assert_eq!(info.num_blocks(), 227252);
    assert_eq!(info.best_block_hash().to_hex(), BEST_HASH);
    assert_eq!(info.chainwork().to_hex(), "83ada4a4009841a");

    let bodies = node.bodies();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["method"], "getinfo");
    assert_eq!(bodies[0]["params"], json!([]));
}

#[tokio::test]
async fn test_get_block_header_sends_positional_hash() {
    let (url, node) = spawn_fake_node().await;
    let client = authed_client(&url);
    let hash: Hash256 = BEST_HASH.parse().unwrap();

    let header = client.get_block_header(&hash).await.unwrap();

    assert_eq!(header.header_hash(), &hash);
    assert_eq!(header.height(), 227252);
    assert_eq!(header.transaction_ids().len(), 1);

    let bodies = node.bodies();
    assert_eq!(bodies[0]["method"], "getblock");
    assert_eq!(bodies[0]["params"], json!([BEST_HASH]));
}

#[tokio::test]
async fn test_error_envelope_behind_http_500_is_surfaced() {
    let (url, _node) = spawn_fake_node().await;
    let client = authed_client(&url);
    let hash: Hash256 = UNKNOWN_HASH.parse().unwrap();

    let err = client.get_block_header(&hash).await.unwrap_err();
    assert!(matches!(
        err,
        NodeClientError::Envelope {
            source: EnvelopeError::MissingResult,
            ..
        }
    ));

    let response = client.call(&RpcRequest::block_header(&hash)).await.unwrap();
    assert!(response.validate_error().is_ok());
    let error = response.error().unwrap();
    assert_eq!(error.code, -5);
    assert_eq!(error.message, "Block not found");
}

#[tokio::test]
async fn test_missing_credentials_is_status_error() {
    let (url, _node) = spawn_fake_node().await;
    let transport = HttpTransport::new(&url, Duration::from_secs(5)).unwrap();

    let err = transport
        .send(&RpcRequest::blockchain_info())
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Status { status: 401, .. }));
}

#[tokio::test]
async fn test_client_wraps_transport_failure_with_method() {
    let (url, _node) = spawn_fake_node().await;
    let client = NodeClient::new(
        HttpTransport::new(&url, Duration::from_secs(5))
            .unwrap()
            .with_basic_auth(RPC_USER, "wrong"),
    );

    let err = client.get_blockchain_info().await.unwrap_err();
    match err {
        NodeClientError::Transport { method, source } => {
            assert_eq!(method, "getinfo");
            assert!(matches!(source, TransportError::Status { status: 401, .. }));
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_success_body_is_invalid_body() {
    let router = Router::new().route("/", post(|| async { "<html>not json</html>" }));
    let url = serve(router).await;
    let transport = HttpTransport::new(&url, Duration::from_secs(5)).unwrap();

    let err = transport
        .send(&RpcRequest::blockchain_info())
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::InvalidBody(_)));
}

#[tokio::test]
async fn test_non_envelope_server_error_keeps_body() {
    let router = Router::new().route(
        "/",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "warming up") }),
    );
    let url = serve(router).await;
    let transport = HttpTransport::new(&url, Duration::from_secs(5)).unwrap();

    let err = transport
        .send(&RpcRequest::blockchain_info())
        .await
        .unwrap_err();

    match err {
        TransportError::Status { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "warming up");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_node_times_out() {
    let router = Router::new().route(
        "/",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            "{}"
        }),
    );
    let url = serve(router).await;
    let transport = HttpTransport::new(&url, Duration::from_millis(100)).unwrap();

    let err = transport
        .send(&RpcRequest::blockchain_info())
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Timeout(_)));
}

#[tokio::test]
async fn test_unreachable_node_is_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport =
        HttpTransport::new(format!("http://{}", addr), Duration::from_secs(5)).unwrap();
    let err = transport
        .send(&RpcRequest::blockchain_info())
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Request(_)));
}
