//! Integration tests for the weather orchestration service.
//!
//! The external providers (ViaCEP and WeatherAPI) are served by httpmock;
//! the service router is exercised in-process with tower's oneshot.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use httpmock::prelude::*;
use serde_json::json;
use tower::ServiceExt;

use cep_weather::config::WeatherConfig;
use cep_weather::weather::{create_router, ClimateClient, WeatherState};

fn test_config(directory_url: &str, climate_url: &str, api_key: Option<&str>) -> WeatherConfig {
    WeatherConfig {
        viacep_base_url: directory_url.to_string(),
        weather_api_url: climate_url.to_string(),
        weather_api_key: api_key.map(str::to_string),
        port: 8081,
        http_timeout_secs: 5,
        rust_log: "info".to_string(),
    }
}

fn lookup_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/weather")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn resolves_cep_to_composed_weather_report() {
    let directory = MockServer::start_async().await;
    let climate = MockServer::start_async().await;

    let directory_mock = directory
        .mock_async(|when, then| {
            when.method(GET).path("/ws/01310000/json/");
            then.status(200).json_body(json!({
                "cep": "01310-000",
                "localidade": "São Paulo",
                "uf": "SP"
            }));
        })
        .await;

    let climate_mock = climate
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/current.json")
                .query_param("key", "test-key")
                .query_param("q", "São Paulo");
            then.status(200).json_body(json!({
                "location": {"name": "Sao Paulo"},
                "current": {"temp_c": 22.3, "humidity": 78}
            }));
        })
        .await;

    let config = test_config(&directory.base_url(), &climate.base_url(), Some("test-key"));
    let app = create_router(WeatherState::new(&config));

    let response = app
        .oneshot(lookup_request(r#"{"cep":"01310000"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), 4096).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["city"], "São Paulo");
    assert!((body["temp_C"].as_f64().unwrap() - 22.3).abs() < 1e-9);
    assert!((body["temp_F"].as_f64().unwrap() - 72.14).abs() < 1e-9);
    assert!((body["temp_K"].as_f64().unwrap() - 295.3).abs() < 1e-9);

    assert_eq!(directory_mock.hits_async().await, 1);
    assert_eq!(climate_mock.hits_async().await, 1);
}

#[tokio::test]
async fn unknown_cep_answers_404_without_climate_call() {
    let directory = MockServer::start_async().await;
    let climate = MockServer::start_async().await;

    directory
        .mock_async(|when, then| {
            when.method(GET).path("/ws/99999999/json/");
            then.status(200).json_body(json!({"erro": true}));
        })
        .await;

    let climate_mock = climate
        .mock_async(|when, then| {
            when.method(GET).path("/v1/current.json");
            then.status(200).json_body(json!({"current": {"temp_c": 0.0}}));
        })
        .await;

    let config = test_config(&directory.base_url(), &climate.base_url(), Some("test-key"));
    let app = create_router(WeatherState::new(&config));

    let response = app
        .oneshot(lookup_request(r#"{"cep":"99999999"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    assert_eq!(&bytes[..], b"can not find zipcode");

    assert_eq!(climate_mock.hits_async().await, 0);
}

#[tokio::test]
async fn directory_response_without_city_fields_is_not_found() {
    let directory = MockServer::start_async().await;
    let climate = MockServer::start_async().await;

    directory
        .mock_async(|when, then| {
            when.method(GET).path("/ws/01310000/json/");
            then.status(200).json_body(json!({"uf": "SP", "bairro": "Bela Vista"}));
        })
        .await;

    let config = test_config(&directory.base_url(), &climate.base_url(), Some("test-key"));
    let app = create_router(WeatherState::new(&config));

    let response = app
        .oneshot(lookup_request(r#"{"cep":"01310000"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn directory_cidade_fallback_is_used() {
    let directory = MockServer::start_async().await;
    let climate = MockServer::start_async().await;

    directory
        .mock_async(|when, then| {
            when.method(GET).path("/ws/13010000/json/");
            then.status(200)
                .json_body(json!({"localidade": "", "cidade": "Campinas"}));
        })
        .await;

    climate
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/current.json")
                .query_param("q", "Campinas");
            then.status(200).json_body(json!({"current": {"temp_c": 25.0}}));
        })
        .await;

    let config = test_config(&directory.base_url(), &climate.base_url(), Some("test-key"));
    let app = create_router(WeatherState::new(&config));

    let response = app
        .oneshot(lookup_request(r#"{"cep":"13010000"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), 4096).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["city"], "Campinas");
}

#[tokio::test]
async fn missing_api_key_is_500_with_no_provider_call() {
    let directory = MockServer::start_async().await;
    let climate = MockServer::start_async().await;

    directory
        .mock_async(|when, then| {
            when.method(GET).path("/ws/01310000/json/");
            then.status(200).json_body(json!({"localidade": "São Paulo"}));
        })
        .await;

    let climate_mock = climate
        .mock_async(|when, then| {
            when.method(GET).path("/v1/current.json");
            then.status(200).json_body(json!({"current": {"temp_c": 22.3}}));
        })
        .await;

    let config = test_config(&directory.base_url(), &climate.base_url(), None);
    let app = create_router(WeatherState::new(&config));

    let response = app
        .oneshot(lookup_request(r#"{"cep":"01310000"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = axum::body::to_bytes(response.into_body(), 4096).await.unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.starts_with("error fetching weather:"));
    assert!(body.contains("weather api key not configured"));

    assert_eq!(climate_mock.hits_async().await, 0);
}

#[tokio::test]
async fn provider_failure_is_500_with_status_and_body() {
    let directory = MockServer::start_async().await;
    let climate = MockServer::start_async().await;

    directory
        .mock_async(|when, then| {
            when.method(GET).path("/ws/01310000/json/");
            then.status(200).json_body(json!({"localidade": "São Paulo"}));
        })
        .await;

    climate
        .mock_async(|when, then| {
            when.method(GET).path("/v1/current.json");
            then.status(403).body(r#"{"error":{"code":2008,"message":"key disabled"}}"#);
        })
        .await;

    let config = test_config(&directory.base_url(), &climate.base_url(), Some("test-key"));
    let app = create_router(WeatherState::new(&config));

    let response = app
        .oneshot(lookup_request(r#"{"cep":"01310000"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = axum::body::to_bytes(response.into_body(), 4096).await.unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("403"));
    assert!(body.contains("key disabled"));
}

#[tokio::test]
async fn city_name_is_url_encoded_on_the_wire() {
    let directory = MockServer::start_async().await;
    let climate = MockServer::start_async().await;

    directory
        .mock_async(|when, then| {
            when.method(GET).path("/ws/29010000/json/");
            then.status(200).json_body(json!({"localidade": "Vitória"}));
        })
        .await;

    // httpmock matches against the decoded value, so an accented city
    // matching proves the request carried a properly encoded query.
    let climate_mock = climate
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/current.json")
                .query_param("q", "Vitória");
            then.status(200).json_body(json!({"current": {"temp_c": 28.1}}));
        })
        .await;

    let config = test_config(&directory.base_url(), &climate.base_url(), Some("test-key"));
    let app = create_router(WeatherState::new(&config));

    let response = app
        .oneshot(lookup_request(r#"{"cep":"29010000"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(climate_mock.hits_async().await, 1);
}

#[tokio::test]
async fn invalid_cep_never_reaches_the_directory() {
    let directory = MockServer::start_async().await;
    let climate = MockServer::start_async().await;

    let directory_mock = directory
        .mock_async(|when, then| {
            when.path_contains("/ws/");
            then.status(200).json_body(json!({"localidade": "São Paulo"}));
        })
        .await;

    let config = test_config(&directory.base_url(), &climate.base_url(), Some("test-key"));
    let app = create_router(WeatherState::new(&config));

    let response = app
        .oneshot(lookup_request(r#"{"cep":"abcdefgh"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(directory_mock.hits_async().await, 0);
}

#[tokio::test]
async fn climate_client_reports_missing_key_without_transport() {
    // A client built without a key must not even need a reachable provider.
    let climate = ClimateClient::with_base_url(reqwest::Client::new(), "http://127.0.0.1:1", None);
    let err = climate.temperature_by_city("São Paulo").await.unwrap_err();
    assert_eq!(err.to_string(), "weather api key not configured");
}
