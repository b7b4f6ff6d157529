use query_history_sync::HistoryError;
use query_history_sync::error::LookupKind;

#[test]
fn remote_error_display() {
    let err = HistoryError::Remote("connection refused".into());
    assert_eq!(err.to_string(), "API request failed: connection refused");
}

#[test]
fn malformed_response_display() {
    let err = HistoryError::MalformedResponse("missing field `result`".into());
    assert_eq!(err.to_string(), "malformed response: missing field `result`");
}

#[test]
fn registry_miss_display() {
    let err = HistoryError::RegistryLookupMiss {
        kind: LookupKind::Uid,
        key: "ds9".into(),
    };
    assert_eq!(err.to_string(), "datasource uid not found in registry: ds9");

    let err = HistoryError::RegistryLookupMiss {
        kind: LookupKind::Name,
        key: "Loki".into(),
    };
    assert_eq!(err.to_string(), "datasource name not found in registry: Loki");
}

#[test]
fn config_error_display() {
    let err = HistoryError::Config("missing api_base_url".into());
    assert_eq!(err.to_string(), "invalid configuration: missing api_base_url");
}

#[test]
fn from_serde_json_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("not valid json").unwrap_err();
    let err: HistoryError = json_err.into();
    assert!(err.to_string().contains("serialization error"));
}

#[test]
fn remote_classification() {
    assert!(HistoryError::Remote("x".into()).is_remote());
    assert!(HistoryError::MalformedResponse("x".into()).is_remote());
    assert!(!HistoryError::Config("x".into()).is_remote());
    assert!(
        !HistoryError::RegistryLookupMiss {
            kind: LookupKind::Name,
            key: "x".into()
        }
        .is_remote()
    );
}
