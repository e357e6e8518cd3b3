//! Process-wide accessor tests.
//!
//! Kept in their own binary: this is the only test that touches the real
//! process environment.

use std::env;

#[test]
fn test_global_settings_are_built_once() {
    env::set_var("TIMEOUT", "45");
    env::set_var("LOG_LEVEL", "DEBUG");
    env::set_var("DEV_MODE", "true");
    env::remove_var("VIRTUAL_HOST");
    env::remove_var("OPENPREDICT_DATA_DIR");

    let cwd = env::current_dir().unwrap();
    assert!(!predict_settings::global().is_initialized());

    let first = predict_settings::settings().unwrap();
    assert_eq!(first.timeout, 45);
    assert_eq!(first.log_level, "DEBUG");
    assert!(first.dev_mode);
    assert_eq!(first.virtual_host, None);
    assert_eq!(first.data_dir, cwd.join("data"));

    // Later mutation has no effect on the built record
    env::set_var("TIMEOUT", "90");
    env::set_var("DEV_MODE", "false");
    predict_settings::global().initialize().unwrap();

    let second = predict_settings::settings().unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.timeout, 45);
    assert!(second.dev_mode);
}
