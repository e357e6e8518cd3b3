//! Settings loading tests against injected environments.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Arc;

use predict_settings::{
    load_config, CoercionPolicy, ConfigError, ConfigStore, Defaults, Settings, FIELDS,
};

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn defaults() -> Defaults {
    Defaults::default().with_data_dir("/srv/openpredict/data")
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn test_empty_environment_equals_default_table() {
    let settings = load_config(&env(&[]), &defaults(), CoercionPolicy::Strict).unwrap();

    assert_eq!(
        settings,
        Settings {
            biolink_version: "3.1.0".to_string(),
            trapi_version: "1.5.0".to_string(),
            timeout: 30,
            log_level: "ERROR".to_string(),
            virtual_host: None,
            dev_mode: false,
            data_dir: PathBuf::from("/srv/openpredict/data"),
        }
    );
}

#[test]
fn test_unrelated_variables_are_ignored() {
    let settings = load_config(
        &env(&[("timeout", "99"), ("OPENPREDICT_TIMEOUT", "99"), ("HOME", "/root")]),
        &defaults(),
        CoercionPolicy::Strict,
    )
    .unwrap();

    assert_eq!(settings, defaults().to_settings());
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn test_each_override_changes_only_its_field() {
    let base = defaults().to_settings();

    let cases: Vec<(&str, &str, Settings)> = vec![
        (
            "BIOLINK_VERSION",
            "4.1.6",
            Settings {
                biolink_version: "4.1.6".to_string(),
                ..base.clone()
            },
        ),
        (
            "TRAPI_VERSION",
            "1.4.0",
            Settings {
                trapi_version: "1.4.0".to_string(),
                ..base.clone()
            },
        ),
        (
            "TIMEOUT",
            "45",
            Settings {
                timeout: 45,
                ..base.clone()
            },
        ),
        (
            "LOG_LEVEL",
            "DEBUG",
            Settings {
                log_level: "DEBUG".to_string(),
                ..base.clone()
            },
        ),
        (
            "VIRTUAL_HOST",
            "openpredict.semanticscience.org",
            Settings {
                virtual_host: Some("openpredict.semanticscience.org".to_string()),
                ..base.clone()
            },
        ),
        (
            "DEV_MODE",
            "true",
            Settings {
                dev_mode: true,
                ..base.clone()
            },
        ),
        (
            "OPENPREDICT_DATA_DIR",
            "/data/openpredict",
            Settings {
                data_dir: PathBuf::from("/data/openpredict"),
                ..base.clone()
            },
        ),
    ];

    assert_eq!(cases.len(), FIELDS.len());

    for (var, value, expected) in cases {
        let settings = load_config(&env(&[(var, value)]), &defaults(), CoercionPolicy::Strict)
            .unwrap_or_else(|e| panic!("{var}={value} failed: {e}"));
        assert_eq!(settings, expected, "{var}={value}");
    }
}

#[test]
fn test_all_overrides_together() {
    let source: BTreeMap<String, String> = [
        ("BIOLINK_VERSION", "4.2.0"),
        ("TRAPI_VERSION", "1.4.0"),
        ("TIMEOUT", "120"),
        ("LOG_LEVEL", "INFO"),
        ("VIRTUAL_HOST", "kit.example.org"),
        ("DEV_MODE", "yes"),
        ("OPENPREDICT_DATA_DIR", "./models"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let settings = Settings::from_source(&source).unwrap();

    assert_eq!(settings.biolink_version, "4.2.0");
    assert_eq!(settings.trapi_version, "1.4.0");
    assert_eq!(settings.timeout, 120);
    assert_eq!(settings.log_level, "INFO");
    assert_eq!(settings.virtual_host.as_deref(), Some("kit.example.org"));
    assert!(settings.dev_mode);
    assert_eq!(settings.data_dir, PathBuf::from("./models"));
}

// =============================================================================
// Invalid values
// =============================================================================

#[test]
fn test_strict_error_message_names_variable() {
    let err = Settings::from_source(&env(&[("TIMEOUT", "thirty")])).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid value for TIMEOUT: expected integer, got 'thirty'"
    );
}

#[test]
fn test_strict_rejects_invalid_boolean() {
    let err = Settings::from_source(&env(&[("DEV_MODE", "perhaps")])).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "DEV_MODE"));
}

#[test]
fn test_lenient_fallback_equals_unset() {
    for (var, value) in [("TIMEOUT", "-5"), ("DEV_MODE", "perhaps")] {
        let invalid = load_config(&env(&[(var, value)]), &defaults(), CoercionPolicy::Lenient)
            .unwrap();
        let unset = load_config(&env(&[]), &defaults(), CoercionPolicy::Lenient).unwrap();

        assert_eq!(invalid, unset, "{var}={value}");
    }
}

#[test]
fn test_lenient_keeps_valid_overrides() {
    let settings = load_config(
        &env(&[("TIMEOUT", "oops"), ("LOG_LEVEL", "WARNING")]),
        &defaults(),
        CoercionPolicy::Lenient,
    )
    .unwrap();

    assert_eq!(settings.timeout, 30);
    assert_eq!(settings.log_level, "WARNING");
}

// =============================================================================
// Store
// =============================================================================

#[test]
fn test_store_returns_identical_values() {
    let store = ConfigStore::new(env(&[("LOG_LEVEL", "DEBUG")])).with_defaults(defaults());

    let first = store.get().unwrap().clone();
    let second = store.get().unwrap().clone();

    assert_eq!(first, second);
    assert_eq!(first.log_level, "DEBUG");
}

#[test]
fn test_store_shared_through_arc() {
    let store = Arc::new(ConfigStore::new(env(&[("TIMEOUT", "5")])).with_defaults(defaults()));
    store.initialize().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            std::thread::spawn(move || store.get().unwrap().timeout)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 5);
    }
}

#[test]
fn test_store_with_legacy_defaults() {
    let store = ConfigStore::new(env(&[])).with_defaults(Defaults::legacy());

    assert_eq!(store.initialize().unwrap().trapi_version, "1.4.0");
    assert_eq!(store.defaults().trapi_version, "1.4.0");
}

#[test]
fn test_settings_serialize_to_json() {
    let settings = defaults().to_settings();
    let json = serde_json::to_value(&settings).unwrap();

    assert_eq!(json["trapi_version"], "1.5.0");
    assert_eq!(json["timeout"], 30);
    assert_eq!(json["virtual_host"], serde_json::Value::Null);
    assert_eq!(json["data_dir"], "/srv/openpredict/data");
}
