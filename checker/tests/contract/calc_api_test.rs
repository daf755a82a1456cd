//! Contract Test: 計算API (GET /calc/*)
//!
//! 稼働中サービスは add / multiply / divide を、モックサービスは sqrt を提供する。
//! 本文はプレーンテキストで、文字列として完全一致で比較する。

use calc_api_check::client::CalcClient;
use calc_api_check_common::{error::CheckError, protocol::Target};
use reqwest::StatusCode;

use crate::support::calc_server::CalcServers;

fn client_for(servers: &CalcServers) -> CalcClient {
    CalcClient::new(servers.config()).expect("valid config")
}

#[tokio::test]
async fn test_api_add() {
    let servers = CalcServers::start().await;
    let client = client_for(&servers);

    let reply = client.get(Target::Live, "/calc/add/1/2").await.unwrap();
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, "3", "ERROR ADD");
    assert_eq!(client.add(1.0, 2.0).await.unwrap(), "3");
}

#[tokio::test]
async fn test_api_sqrt() {
    let servers = CalcServers::start().await;
    let client = client_for(&servers);

    let reply = client.get(Target::Mock, "/calc/sqrt/64").await.unwrap();
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, "8", "ERROR SQRT");
    assert_eq!(client.sqrt(64.0).await.unwrap(), "8");
}

#[tokio::test]
async fn test_api_multiply() {
    let servers = CalcServers::start().await;
    let client = client_for(&servers);

    let reply = client.get(Target::Live, "/calc/multiply/6/7").await.unwrap();
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, "42", "ERROR MULTIPLY");
    assert_eq!(client.multiply(6.0, 7.0).await.unwrap(), "42");
}

#[tokio::test]
async fn test_api_divide() {
    let servers = CalcServers::start().await;
    let client = client_for(&servers);

    let reply = client.get(Target::Live, "/calc/divide/10/2").await.unwrap();
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, "5.0", "ERROR DIVIDE");
    assert_eq!(client.divide(10.0, 2.0).await.unwrap(), "5.0");
}

#[tokio::test]
async fn test_api_divide_by_zero() {
    let servers = CalcServers::start().await;
    let client = client_for(&servers);

    let err = client
        .divide(10.0, 0.0)
        .await
        .expect_err("division by zero did not raise");

    assert!(
        err.to_string().contains("HTTP Error 406"),
        "expected error was not received: {err}"
    );
    match err {
        CheckError::Status { url, status, .. } => {
            assert_eq!(status, 406);
            assert!(url.ends_with("/calc/divide/10/0"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_sqrt_is_not_sent_to_live_service() {
    // 稼働中サービスは sqrt を持たない。モック側だけに応答を用意する
    let servers = CalcServers::start().await;
    let client = client_for(&servers);

    client.sqrt(64.0).await.unwrap();

    let live_requests = servers.live.received_requests().await.unwrap();
    assert!(live_requests.is_empty());
    let mock_requests = servers.mock.received_requests().await.unwrap();
    assert_eq!(mock_requests.len(), 1);
    assert_eq!(mock_requests[0].url.path(), "/calc/sqrt/64");
}

#[tokio::test]
async fn test_unmatched_route_is_status_error() {
    let servers = CalcServers::start().await;
    let client = client_for(&servers);

    // wiremock は未定義ルートに404を返す
    let err = client.add(2.0, 2.0).await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.to_string(), "HTTP Error 404: Not Found");
}
