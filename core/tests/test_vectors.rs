//! Verify request building, classification and mapping against the JSON
//! test vectors stored in `test-vectors/`.
//!
//! Each vector describes the input, the expected URL, a simulated response,
//! and either the expected result or the expected error kind. Records are
//! compared as serialized JSON so field ordering never matters.

use ifpa_core::testing::FakeTransportFactory;
use ifpa_core::{ApiError, ClientConfig, IfpaClient, RequestExecutor};
use serde_json::Value;

const BASE_URL: &str = "https://api.ifpapinball.com/v1";
const API_KEY: &str = "abc123";

fn fake(case: &Value) -> FakeTransportFactory {
    let sim = &case["simulated_response"];
    FakeTransportFactory::new(sim["body"].as_str().unwrap(), sim["status"].as_u64().unwrap() as u16)
}

fn assert_url(factory: &FakeTransportFactory, case: &Value, name: &str) {
    let expected = format!("{BASE_URL}{}", case["expected_url"].as_str().unwrap());
    let request = factory.last_request().unwrap();
    assert_eq!(request.url, expected, "{name}: url");
    assert!(request.released, "{name}: transport released");
}

fn assert_error_kind(err: &ApiError, case: &Value, name: &str) {
    let expected = case["expected_error"].as_str().unwrap();
    let matched = match expected {
        "HttpStatus" => matches!(err, ApiError::HttpStatus { .. }),
        "MalformedResponse" => matches!(err, ApiError::MalformedResponse { .. }),
        "MissingField" => matches!(err, ApiError::MissingField { .. }),
        "Transport" => matches!(err, ApiError::Transport { .. }),
        other => panic!("{name}: unknown expected_error: {other}"),
    };
    assert!(matched, "{name}: expected {expected}, got {err:?}");
}

// ---------------------------------------------------------------------------
// Raw executor
// ---------------------------------------------------------------------------

#[test]
fn http_test_vectors() {
    let raw = include_str!("../../test-vectors/http.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let factory = fake(case);
        let executor = RequestExecutor::new(&ClientConfig::new(API_KEY), factory.clone());

        let params: Vec<(&str, &str)> = case["params"]
            .as_array()
            .unwrap()
            .iter()
            .map(|pair| (pair[0].as_str().unwrap(), pair[1].as_str().unwrap()))
            .collect();
        let result = executor.get(case["path"].as_str().unwrap(), &params);
        assert_url(&factory, case, name);

        if case.get("expected_error").is_some() {
            let err = result.unwrap_err();
            assert_error_kind(&err, case, name);
            if let Some(status) = case.get("expected_status") {
                assert_eq!(err.status(), status.as_u64().map(|s| s as u16), "{name}: status");
                assert_eq!(
                    err.response_body(),
                    case["simulated_response"]["body"].as_str(),
                    "{name}: raw body"
                );
            }
        } else {
            let decoded = Value::Object(result.unwrap());
            assert_eq!(decoded, case["expected_result"], "{name}: decoded");
        }
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

#[test]
fn player_test_vectors() {
    let raw = include_str!("../../test-vectors/player.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let factory = fake(case);
        let client = IfpaClient::with_transport(&ClientConfig::new(API_KEY), factory.clone());

        let result = client.get_player(case["input_id"].as_str().unwrap());
        assert_url(&factory, case, name);

        if case.get("expected_error").is_some() {
            assert_error_kind(&result.unwrap_err(), case, name);
        } else {
            let player = serde_json::to_value(result.unwrap()).unwrap();
            assert_eq!(player, case["expected_result"], "{name}: player");
        }
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[test]
fn search_test_vectors() {
    let raw = include_str!("../../test-vectors/search.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let factory = fake(case);
        let client = IfpaClient::with_transport(&ClientConfig::new(API_KEY), factory.clone());

        let input = case["input"].as_str().unwrap();
        let result = match case["by"].as_str().unwrap() {
            "name" => client.list_player_ids_by_name_segment(input),
            "email" => client.list_player_ids_by_email(input),
            other => panic!("{name}: unknown search kind: {other}"),
        };
        assert_url(&factory, case, name);

        if case.get("expected_error").is_some() {
            assert_error_kind(&result.unwrap_err(), case, name);
        } else {
            let expected: Vec<String> = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: ids");
        }
    }
}
