//! Prediction session driven against the stub service

use crate::common::{forecast_body, Reply, StubServer};
use rust_decimal_macros::dec;
use sona_forecast::client::{ClientConfig, PredictionClient};
use sona_forecast::location::{Location, LocationRegistry};
use sona_forecast::selection::{Metal, Selection};
use sona_forecast::session::{Completion, FetchState, PredictionSession, LOAD_ERROR_MESSAGE};

fn client_for(server: &StubServer) -> PredictionClient {
    PredictionClient::with_config(ClientConfig {
        base_url: server.base_url.clone(),
        ..ClientConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_failure_then_retry_with_new_selection() {
    let server = StubServer::start(vec![
        Reply::ok(forecast_body("Mumbai", "Maharashtra", 72000.0)),
        Reply::status(500, r#"{"detail":"model unavailable"}"#),
        Reply::ok(forecast_body("Chennai", "Tamil Nadu", 71928.0)),
    ])
    .await;
    let client = client_for(&server);
    let registry = LocationRegistry::builtin();

    let mut session = PredictionSession::default();
    assert_eq!(session.load(&client).await, Completion::Applied);
    let first = session.predictions().cloned().unwrap();
    assert_eq!(first.current_price, dec!(72000));

    // Metal switch fails: stale forecast stays, error is set
    let pending = session.set_metal(Metal::Silver);
    assert_eq!(session.run(&client, pending).await, Completion::Failed);
    assert_eq!(session.state(), FetchState::Failed);
    assert_eq!(session.error(), Some(LOAD_ERROR_MESSAGE));
    assert_eq!(session.predictions(), Some(&first));

    // Location changes before the user clicks retry; the new location loads
    let pending = session.set_location(Location::first_in(&registry, "Tamil Nadu").unwrap());
    assert_eq!(session.run(&client, pending).await, Completion::Applied);
    assert!(session.error().is_none());

    let received = server.received();
    assert_eq!(received.len(), 3);
    assert_eq!(received[1].param("metal").as_deref(), Some("silver"));
    assert_eq!(received[1].param("unit").as_deref(), Some("100"));
    assert_eq!(received[2].param("city").as_deref(), Some("Chennai"));
    assert_eq!(received[2].param("metal").as_deref(), Some("silver"));
}

#[tokio::test]
async fn test_retry_reissues_identical_request() {
    let server = StubServer::start(vec![
        Reply::status(502, ""),
        Reply::ok(forecast_body("Pune", "Maharashtra", 72072.0)),
    ])
    .await;
    let client = client_for(&server);

    let mut session = PredictionSession::new(Selection::for_metal(
        Metal::Gold,
        Location::new("Maharashtra", "Pune"),
    ));
    assert_eq!(session.load(&client).await, Completion::Failed);
    assert!(session.predictions().is_none());

    let pending = session.retry();
    assert_eq!(session.run(&client, pending).await, Completion::Applied);
    assert_eq!(session.state(), FetchState::Success);

    let received = server.received();
    assert_eq!(received[0].target, received[1].target);
}
