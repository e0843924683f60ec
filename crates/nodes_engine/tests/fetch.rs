use std::time::Duration;

use nodes_engine::{ApiSettings, FailureKind, NodesApi, ReqwestNodesApi};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NODES_BODY: &str = r#"{
  "data": [
    {
      "id": "a1",
      "attributes": {
        "name": "Node A",
        "evmChainID": "1",
        "createdAt": "2023-01-01T00:00:00Z",
        "state": "primary"
      }
    },
    {
      "id": "b2",
      "attributes": {
        "name": "Node B",
        "evmChainID": "137",
        "createdAt": "2023-06-01T00:00:00Z"
      }
    }
  ]
}"#;

fn settings_for(server: &MockServer) -> ApiSettings {
    ApiSettings {
        base_url: server.uri().parse().expect("mock server url"),
        ..ApiSettings::default()
    }
}

#[tokio::test]
async fn get_nodes_returns_sorted_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(NODES_BODY, "application/json"))
        .mount(&server)
        .await;

    let api = ReqwestNodesApi::new(settings_for(&server));
    let nodes = api
        .get_nodes(&CancellationToken::new())
        .await
        .expect("fetch ok");

    let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["b2", "a1"]);
    assert_eq!(nodes[0].attributes.name, "Node B");
    assert_eq!(nodes[0].attributes.evm_chain_id, "137");
}

#[tokio::test]
async fn get_nodes_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/nodes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = ReqwestNodesApi::new(settings_for(&server));
    let err = api
        .get_nodes(&CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn get_nodes_fails_on_malformed_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not a document", "application/json"))
        .mount(&server)
        .await;

    let api = ReqwestNodesApi::new(settings_for(&server));
    let err = api
        .get_nodes(&CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn get_nodes_fails_on_malformed_timestamp() {
    let body = r#"{
      "data": [
        {
          "id": "a1",
          "attributes": {
            "name": "Node A",
            "evmChainID": "1",
            "createdAt": "yesterday-ish"
          }
        }
      ]
    }"#;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let api = ReqwestNodesApi::new(settings_for(&server));
    let err = api
        .get_nodes(&CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn get_nodes_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/nodes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw(NODES_BODY, "application/json"),
        )
        .mount(&server)
        .await;

    let settings = ApiSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let api = ReqwestNodesApi::new(settings);
    let err = api
        .get_nodes(&CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn cancelled_token_fails_fast() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/nodes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_raw(NODES_BODY, "application/json"),
        )
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    cancel.cancel();

    let api = ReqwestNodesApi::new(settings_for(&server));
    let err = api.get_nodes(&cancel).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Cancelled);
}
