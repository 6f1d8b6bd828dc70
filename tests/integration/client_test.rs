//! Prediction client against the stub service

use crate::common::{forecast_body, silent_server, Reply, StubServer};
use rust_decimal::Decimal;
use sona_forecast::client::{
    ClientConfig, ClientError, PredictionApi, PredictionClient, PredictionRequest, FORECAST_DAYS,
};
use sona_forecast::selection::{Metal, Purity};
use std::time::Duration;

fn client_for(base_url: &str) -> PredictionClient {
    PredictionClient::with_config(ClientConfig {
        base_url: base_url.to_string(),
        timeout: Some(Duration::from_secs(5)),
        ..ClientConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_pune_gold() {
    let body = forecast_body("Pune", "Maharashtra", 72072.0);
    let server = StubServer::start(vec![Reply::ok(body)]).await;
    let client = client_for(&server.base_url);

    let data = client
        .predict(Metal::Gold, "Maharashtra", "Pune", None, None)
        .await
        .unwrap();

    assert_eq!(data.forecast.len(), FORECAST_DAYS);
    let confidence_range = Decimal::ZERO..=Decimal::ONE_HUNDRED;
    for point in &data.forecast {
        assert!(confidence_range.contains(&point.confidence));
    }

    let received = server.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].method, "GET");
    assert_eq!(received[0].path(), "/api/predict");
    assert_eq!(received[0].param("metal").as_deref(), Some("gold"));
    assert_eq!(received[0].param("state").as_deref(), Some("Maharashtra"));
    assert_eq!(received[0].param("city").as_deref(), Some("Pune"));
    // Defaults filled in when omitted
    assert_eq!(received[0].param("purity").as_deref(), Some("22K"));
    assert_eq!(received[0].param("unit").as_deref(), Some("10"));
}

#[tokio::test]
async fn test_fetch_encodes_state_names() {
    let body = forecast_body("Srinagar", "Jammu & Kashmir", 7400.0);
    let server = StubServer::start(vec![Reply::ok(body)]).await;
    let client = client_for(&server.base_url);

    let request = PredictionRequest::new(Metal::Silver, "Jammu & Kashmir", "Srinagar")
        .purity(Purity::K24)
        .unit(1000);
    client.fetch_predictions(&request).await.unwrap();

    let received = server.received();
    assert_eq!(received[0].param("state").as_deref(), Some("Jammu & Kashmir"));
    assert_eq!(received[0].param("metal").as_deref(), Some("silver"));
    assert_eq!(received[0].param("unit").as_deref(), Some("1000"));
}

#[tokio::test]
async fn test_non_2xx_is_failure() {
    let body = r#"{"detail":"Invalid state or city"}"#;
    let server = StubServer::start(vec![Reply::status(400, body)]).await;
    let client = client_for(&server.base_url);

    let err = client
        .predict(Metal::Gold, "Goa", "Pune", None, None)
        .await
        .unwrap_err();

    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status.as_u16(), 400);
            assert!(body.contains("Invalid state or city"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_short_forecast_is_failure() {
    let body = r#"{"currentPrice": 100, "forecast": [], "weekAverage": 100, "weekTrend": 0}"#;
    let server = StubServer::start(vec![Reply::ok(body)]).await;
    let client = client_for(&server.base_url);

    let err = client
        .predict(Metal::Gold, "Maharashtra", "Mumbai", None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_malformed_body_is_failure() {
    let body = "<html>gateway</html>";
    let server = StubServer::start(vec![Reply::ok(body)]).await;
    let client = client_for(&server.base_url);

    let err = client
        .predict(Metal::Gold, "Maharashtra", "Mumbai", None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Json(_)));
}

#[tokio::test]
async fn test_connection_refused_is_failure() {
    // Bind then drop to get a port with nothing listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{}", addr));
    let err = client
        .predict(Metal::Gold, "Maharashtra", "Mumbai", None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}

#[tokio::test]
async fn test_hung_request_times_out() {
    let (base_url, handle) = silent_server().await;
    let client = PredictionClient::with_config(ClientConfig {
        base_url,
        timeout: Some(Duration::from_millis(200)),
        ..ClientConfig::default()
    })
    .unwrap();

    let err = client
        .predict(Metal::Gold, "Maharashtra", "Mumbai", None, None)
        .await
        .unwrap_err();
    match err {
        ClientError::Http(e) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {:?}", other),
    }
    handle.abort();
}

#[tokio::test]
async fn test_refresh_models() {
    let body = r#"{"message":"Models retrained"}"#;
    let server = StubServer::start(vec![Reply::ok(body)]).await;
    let client = client_for(&server.base_url);

    let ack = client.refresh_models().await.unwrap();
    assert_eq!(ack.0["message"], "Models retrained");

    let received = server.received();
    assert_eq!(received[0].method, "POST");
    assert_eq!(received[0].path(), "/api/refresh-models");
}

#[tokio::test]
async fn test_refresh_models_empty_body() {
    let server = StubServer::start(vec![Reply::ok("")]).await;
    let client = client_for(&server.base_url);

    let ack = client.refresh_models().await.unwrap();
    assert!(ack.0.is_null());
}

#[tokio::test]
async fn test_refresh_models_failure() {
    let server = StubServer::start(vec![Reply::status(503, "")]).await;
    let client = client_for(&server.base_url);
    assert!(client.refresh_models().await.is_err());
}

#[tokio::test]
async fn test_catalog_and_health() {
    let server = StubServer::start(vec![
        Reply::ok(r#"{"gold": ["18K", "22K", "24K"], "silver": ["Pure"]}"#),
        Reply::ok(r#"{"units": [1, 100, 1000], "label": "grams"}"#),
        Reply::ok(r#"{"status": "healthy", "service": "sona-ai-api"}"#),
    ])
    .await;
    let client = client_for(&server.base_url);

    let purities = client.purities().await.unwrap();
    assert_eq!(purities.gold, vec!["18K", "22K", "24K"]);
    assert_eq!(purities.silver, vec!["Pure"]);

    let units = client.units(Metal::Silver).await.unwrap();
    assert_eq!(units.units, vec![1, 100, 1000]);

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "healthy");

    let received = server.received();
    assert_eq!(received[0].path(), "/api/purities");
    assert_eq!(received[1].path(), "/api/units");
    assert_eq!(received[1].param("metal").as_deref(), Some("silver"));
    assert_eq!(received[2].path(), "/health");
}
