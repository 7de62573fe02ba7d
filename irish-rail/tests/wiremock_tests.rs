//! Integration tests for the realtime client and directory (wiremock-based)

use approx::assert_abs_diff_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use irish_rail::{RealtimeClient, RealtimeConfig, RealtimeError, StationDirectory};

const ALL_STATIONS: &str = include_str!("fixtures/all_stations.xml");
const STATION_DATA: &str = include_str!("fixtures/station_data.xml");

/// Dublin city centre.
const CENTRE: (f64, f64) = (53.3498, -6.2603);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn directory_for(server: &MockServer) -> StationDirectory {
    init_tracing();
    let config = RealtimeConfig::new()
        .with_base_url(format!("{}/realtime/realtime.asmx", server.uri()))
        .with_timeout(5);
    StationDirectory::new(RealtimeClient::new(config).unwrap())
}

async fn serve_stations(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/realtime/realtime.asmx/getAllStationsXML"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_all_success() {
    let server = MockServer::start().await;
    serve_stations(&server, ALL_STATIONS).await;

    let stations = directory_for(&server).fetch_all().await.unwrap();

    assert_eq!(stations.len(), 10);
    assert_eq!(stations[0].description(), "Belfast");
    assert_eq!(stations[9].description(), "Cork");
}

#[tokio::test]
async fn test_every_query_refetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/realtime/realtime.asmx/getAllStationsXML"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ALL_STATIONS))
        .expect(3)
        .mount(&server)
        .await;

    let directory = directory_for(&server);
    directory.fetch_all().await.unwrap();
    directory.find_by_name("Howth").await.unwrap();
    directory.find_closest_to(CENTRE.0, CENTRE.1).await.unwrap();
}

#[tokio::test]
async fn test_find_by_name_ignores_case() {
    let server = MockServer::start().await;
    serve_stations(&server, ALL_STATIONS).await;

    let station = directory_for(&server)
        .find_by_name("dublin connolly")
        .await
        .unwrap();

    assert_eq!(station.description(), "Dublin Connolly");
    assert_eq!(station.code(), "CNLLY");
}

#[tokio::test]
async fn test_find_by_name_not_found() {
    let server = MockServer::start().await;
    serve_stations(&server, ALL_STATIONS).await;

    let err = directory_for(&server)
        .find_by_name("Atlantis")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(err, RealtimeError::StationNotFound { ref name } if name == "Atlantis"));
}

#[tokio::test]
async fn test_find_closest_to_city_centre() {
    let server = MockServer::start().await;
    serve_stations(&server, ALL_STATIONS).await;

    let station = directory_for(&server)
        .find_closest_to(CENTRE.0, CENTRE.1)
        .await
        .unwrap();

    assert_eq!(station.description(), "Tara Street");
    // Reference: Vincenty inverse on WGS-84.
    let metres = station.kilometres_from(CENTRE.0, CENTRE.1).unwrap() * 1000.0;
    assert_abs_diff_eq!(metres, 496.0444, epsilon = 1.0);
}

#[tokio::test]
async fn test_find_closest_to_cork() {
    let server = MockServer::start().await;
    serve_stations(&server, ALL_STATIONS).await;

    let station = directory_for(&server)
        .find_closest_to(51.8985, -8.4756)
        .await
        .unwrap();

    assert_eq!(station.code(), "CORK");
}

#[tokio::test]
async fn test_find_closest_to_empty_directory() {
    let server = MockServer::start().await;
    serve_stations(
        &server,
        r#"<?xml version="1.0" encoding="utf-8"?>
<ArrayOfObjStation xmlns="http://api.irishrail.ie/realtime/" />"#,
    )
    .await;

    let err = directory_for(&server)
        .find_closest_to(CENTRE.0, CENTRE.1)
        .await
        .unwrap_err();

    assert!(matches!(err, RealtimeError::EmptyDirectory));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_missing_field_is_parse_error() {
    let server = MockServer::start().await;
    let broken = ALL_STATIONS.replacen("<StationCode>HOWTH</StationCode>", "", 1);
    serve_stations(&server, &broken).await;

    let err = directory_for(&server).fetch_all().await.unwrap_err();

    assert!(err.is_parse(), "got {err:?}");
    assert!(err.to_string().contains("StationCode"));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    serve_stations(&server, "<html><body>Maintenance").await;

    let err = directory_for(&server)
        .find_by_name("Howth")
        .await
        .unwrap_err();

    assert!(err.is_parse(), "got {err:?}");
}

#[tokio::test]
async fn test_server_error_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/realtime/realtime.asmx/getAllStationsXML"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = directory_for(&server).fetch_all().await.unwrap_err();

    assert!(err.is_network());
    assert!(matches!(err, RealtimeError::Api { status: 503, .. }));
}

#[tokio::test]
async fn test_next_arrivals_success() {
    let server = MockServer::start().await;
    serve_stations(&server, ALL_STATIONS).await;
    Mock::given(method("GET"))
        .and(path("/realtime/realtime.asmx/getStationDataByNameXML"))
        .and(query_param("StationDesc", "Dublin Connolly"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STATION_DATA))
        .expect(1)
        .mount(&server)
        .await;

    let directory = directory_for(&server);
    let station = directory.find_by_name("Dublin Connolly").await.unwrap();
    let arrivals = station.next_arrivals(directory.client()).await.unwrap();

    assert_eq!(arrivals.len(), 3);
    assert_eq!(arrivals[0].code(), "E917");
    for train in &arrivals {
        assert!(std::ptr::eq(train.station(), &station));
    }
}

#[tokio::test]
async fn test_next_arrivals_escapes_description() {
    let server = MockServer::start().await;
    let stations = ALL_STATIONS.replace("Dublin Heuston", "Dún Laoghaire");
    serve_stations(&server, &stations).await;
    Mock::given(method("GET"))
        .and(path("/realtime/realtime.asmx/getStationDataByNameXML"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<ArrayOfObjStationData xmlns="http://api.irishrail.ie/realtime/" />"#,
        ))
        .mount(&server)
        .await;

    let directory = directory_for(&server);
    let station = directory.find_by_name("dún laoghaire").await.unwrap();
    let arrivals = station.next_arrivals(directory.client()).await.unwrap();
    assert!(arrivals.is_empty());

    let requests = server.received_requests().await.unwrap();
    let board = requests
        .iter()
        .find(|r| r.url.path().ends_with("getStationDataByNameXML"))
        .unwrap();
    assert_eq!(board.url.query(), Some("StationDesc=D%C3%BAn+Laoghaire"));
}

#[tokio::test]
async fn test_next_arrivals_missing_field() {
    let server = MockServer::start().await;
    serve_stations(&server, ALL_STATIONS).await;
    Mock::given(method("GET"))
        .and(path("/realtime/realtime.asmx/getStationDataByNameXML"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(STATION_DATA.replacen("<Duein>31</Duein>", "", 1)),
        )
        .mount(&server)
        .await;

    let directory = directory_for(&server);
    let station = directory.find_by_name("Dublin Connolly").await.unwrap();
    let err = station.next_arrivals(directory.client()).await.unwrap_err();

    assert!(err.is_parse());
    assert!(err.to_string().contains("arrival element 2"));
}

#[tokio::test]
async fn test_invalid_utf8_is_parse_error() {
    let server = MockServer::start().await;
    let mut body = ALL_STATIONS.replacen("Howth", "Bad\u{1}", 1).into_bytes();
    let marker = body.iter().position(|&b| b == 1).unwrap();
    body[marker] = 0xFF;
    Mock::given(method("GET"))
        .and(path("/realtime/realtime.asmx/getAllStationsXML"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/xml; charset=utf-8"))
        .mount(&server)
        .await;

    let err = directory_for(&server).fetch_all().await.unwrap_err();

    assert!(err.is_parse(), "got {err:?}");
    assert!(matches!(
        err,
        RealtimeError::Parse(irish_rail::ParseError::Encoding(_))
    ));
}

#[tokio::test]
async fn test_byte_order_mark_is_accepted() {
    let server = MockServer::start().await;
    let body = format!("\u{feff}{ALL_STATIONS}").into_bytes();
    Mock::given(method("GET"))
        .and(path("/realtime/realtime.asmx/getAllStationsXML"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/xml; charset=utf-8"))
        .mount(&server)
        .await;

    let stations = directory_for(&server).fetch_all().await.unwrap();
    assert_eq!(stations.len(), 10);
}

#[tokio::test]
async fn test_find_closest_to_rejects_invalid_point() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ALL_STATIONS))
        .expect(0)
        .mount(&server)
        .await;

    let directory = directory_for(&server);
    for (lat, lon) in [(f64::NAN, CENTRE.1), (123.0, CENTRE.1), (CENTRE.0, -181.0)] {
        let err = directory.find_closest_to(lat, lon).await.unwrap_err();
        assert!(matches!(err, RealtimeError::InvalidPoint(_)), "got {err:?}");
    }
}

#[tokio::test]
async fn test_find_closest_to_out_of_range_station() {
    let server = MockServer::start().await;
    let stations = ALL_STATIONS.replacen(
        "<StationLatitude>54.6123</StationLatitude>",
        "<StationLatitude>95.0</StationLatitude>",
        1,
    );
    serve_stations(&server, &stations).await;

    let err = directory_for(&server)
        .find_closest_to(CENTRE.0, CENTRE.1)
        .await
        .unwrap_err();

    assert!(err.is_parse(), "got {err:?}");
    assert!(err.to_string().contains("Belfast"));
}
