//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port and drives `IfpaClient` through
//! the real `ureq` transport, so URL encoding, headers, status handling and
//! mapping are all exercised over actual HTTP.

use std::net::SocketAddr;

use ifpa_core::{ApiError, ClientConfig, IfpaClient, UreqTransportFactory};

const API_KEY: &str = "abc123";

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, API_KEY, mock_server::sample_players()).await
        })
        .unwrap();
    });

    addr
}

fn client(addr: SocketAddr, api_key: &str) -> IfpaClient<UreqTransportFactory> {
    let config = ClientConfig::new(api_key).with_base_url(&format!("http://{addr}/v1"));
    IfpaClient::new(&config)
}

#[test]
fn player_lookup_and_search() {
    let addr = start_server();
    let client = client(addr, API_KEY);

    // Known player with full stats.
    let robin = client.get_player("25696").unwrap();
    assert_eq!(robin.id(), "25696");
    assert_eq!(robin.first_name(), Some("Robin"));
    assert_eq!(robin.last_name(), Some("Lassonde"));
    assert_eq!(robin.age(), Some(1));
    assert_eq!(robin.is_excluded(), Some(false));
    assert_eq!(robin.is_ifpa_registered(), Some(true));
    let stats = robin.stats().unwrap();
    assert_eq!(stats.wppr_rank(), Some(81));
    assert_eq!(stats.rating_rank(), Some(93));
    assert_eq!(stats.rating_value(), Some(1697.08));

    // Unranked player: "" age, sentinel stats.
    let jayson = client.get_player("55848").unwrap();
    assert_eq!(jayson.age(), None);
    assert_eq!(jayson.is_excluded(), Some(true));
    let stats = jayson.stats().unwrap();
    assert_eq!(stats.wppr_rank(), None);
    assert_eq!(stats.rating_rank(), None);
    assert_eq!(stats.rating_value(), None);

    // Unknown id comes back as 200 with null data.
    let err = client.get_player("99999999").unwrap_err();
    assert!(matches!(err, ApiError::MissingField { .. }), "got {err:?}");

    // Searches.
    let ids = client.list_player_ids_by_name_segment("del").unwrap();
    assert_eq!(ids, vec!["9303", "55848"]);
    let ids = client.list_player_ids_by_name_segment("Robin Lassonde").unwrap();
    assert!(ids.is_empty());
    let ids = client.list_player_ids_by_email("rlassonde@gmail.com").unwrap();
    assert_eq!(ids, vec!["25696"]);
    let ids = client.list_player_ids_by_email("foo@bar.com").unwrap();
    assert!(ids.is_empty());
}

#[test]
fn wrong_api_key_is_http_status_error() {
    let addr = start_server();
    let client = client(addr, "wrong");

    let err = client.get_player("25696").unwrap_err();
    match err {
        ApiError::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, r#"{"error":"API_KEY was not found"}"#);
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[test]
fn closed_port_is_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let mut client = client(addr, API_KEY);
    client.set_timeout_seconds(1);

    let err = client.get_player("25696").unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }), "got {err:?}");
}
