use super::models::{HealthCheck, UIConfiguration};

#[test]
fn test_ui_configuration_default() {
    let config = UIConfiguration::default();
    assert_eq!(config.client_id, "");
    assert_eq!(config.realm, "");
    assert_eq!(config.url, "");
    assert_eq!(config.deployment, "");
}

#[test]
fn test_ui_configuration_from_config() {
    let config = crate::config::Config::for_tests();
    let ui = UIConfiguration::from_config(&config);

    assert_eq!(ui.client_id, config.keycloak_ui_id);
    assert_eq!(ui.realm, config.keycloak_realm);
    assert_eq!(ui.deployment, "test");
}

#[test]
fn test_ui_configuration_serialization() {
    let config = UIConfiguration {
        client_id: "atrium-ui".to_string(),
        realm: "atrium".to_string(),
        url: "http://localhost:8080".to_string(),
        deployment: "local".to_string(),
    };

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("atrium-ui"));
    assert!(json.contains("clientId")); // Test snake_case -> camelCase conversion
    assert!(json.contains("atrium"));
}

#[test]
fn test_health_check_serialization() {
    let health = HealthCheck {
        status: "ok".to_string(),
    };

    let json = serde_json::to_string(&health).unwrap();
    assert!(json.contains("ok"));
    assert!(json.contains("status"));
}

#[test]
fn test_health_check_deserialization() {
    let json = r#"{"status":"ok"}"#;
    let health: HealthCheck = serde_json::from_str(json).unwrap();
    assert_eq!(health.status, "ok");
}
