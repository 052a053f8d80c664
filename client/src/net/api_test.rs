use super::*;

#[test]
fn successful_probe_is_online() {
    let probe = Ok(BackendStatus { model_loaded: Some(true), device: Some("cpu".to_owned()) });
    assert_eq!(health_from_probe(&probe), BackendHealth::Online("model loaded on cpu".to_owned()));
}

#[test]
fn non_2xx_probe_is_offline() {
    assert_eq!(health_from_probe(&Err(ApiError::Status(503))), BackendHealth::Offline);
}

#[test]
fn network_failure_probe_is_offline() {
    let probe = Err(ApiError::Request("connection refused".to_owned()));
    assert_eq!(health_from_probe(&probe), BackendHealth::Offline);
}

#[test]
fn api_error_messages_format() {
    assert_eq!(ApiError::Status(500).to_string(), "unexpected status: 500");
    assert_eq!(ApiError::Request("boom".to_owned()).to_string(), "request failed: boom");
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "response decode failed: eof");
}

#[tokio::test]
async fn calls_outside_browser_are_unavailable() {
    let config = BackendConfig::default();
    assert_eq!(fetch_backend_status(&config).await, Err(ApiError::Unavailable));
    assert_eq!(predict(&config, "data:image/png;base64,".to_owned()).await, Err(ApiError::Unavailable));
}
