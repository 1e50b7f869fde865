use pitwall_core::config::*;
use pitwall_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = PitwallConfig::from_toml("").unwrap();

    // Search defaults
    assert_eq!(config.search.effective_step_count(), 20);
    assert_eq!(config.search.effective_stride(), 1);
    assert_eq!(config.search.effective_top_n(), 10);
    assert!(config.search.effective_parallel());

    // Narrowing defaults
    assert_eq!(config.narrowing.effective_pool_step_count(), 10);
    assert_eq!(config.narrowing.effective_pool_stride(), 2);
    assert_eq!(config.narrowing.effective_min_pool_size(), 5);
    assert_eq!(config.narrowing.effective_regeneration_survivors(), 3);
    assert_eq!(config.narrowing.effective_perturbations_per_survivor(), 5);
    assert_eq!(config.narrowing.effective_perturbation_range(), 0.1);
    assert_eq!(config.narrowing.effective_optimal_confidence(), 99.0);
    assert_eq!(config.narrowing.effective_default_attempt_estimate(), 5);
    assert!(config.narrowing.seed.is_none());

    // Observability defaults
    assert_eq!(config.observability.effective_log_level(), "info");
    assert!(!config.observability.effective_json());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[search]
step_count = 8

[narrowing]
seed = 42
perturbation_range = 0.2
"#;
    let config = PitwallConfig::from_toml(toml).unwrap();
    assert_eq!(config.search.effective_step_count(), 8);
    assert_eq!(config.search.effective_top_n(), 10); // default
    assert_eq!(config.narrowing.seed, Some(42));
    assert_eq!(config.narrowing.effective_perturbation_range(), 0.2);
}

#[test]
fn config_serde_roundtrip() {
    let mut config = PitwallConfig::default();
    config.narrowing.seed = Some(7);
    config.observability.log_level = Some("debug".to_string());
    let toml_str = config.to_toml().unwrap();
    let roundtripped = PitwallConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = PitwallConfig::from_toml("[search\nstep_count = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn validate_rejects_zero_step_count() {
    let config = PitwallConfig::from_toml("[search]\nstep_count = 0\n").unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("search.step_count"));
}

#[test]
fn validate_rejects_perturbation_range_above_one() {
    let config = PitwallConfig::from_toml("[narrowing]\nperturbation_range = 1.5\n").unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { field, .. }) if field == "narrowing.perturbation_range"
    ));
}

#[test]
fn project_file_overrides_user_file() {
    let user_dir = tempfile::tempdir().unwrap();
    let project_dir = tempfile::tempdir().unwrap();
    let user_path = user_dir.path().join("config.toml");
    std::fs::write(&user_path, "[search]\nstep_count = 12\ntop_n = 3\n").unwrap();
    std::fs::write(
        project_dir.path().join("pitwall.toml"),
        "[search]\nstep_count = 6\n",
    )
    .unwrap();

    let config =
        PitwallConfig::load_with_user_config(Some(&user_path), project_dir.path(), None).unwrap();
    assert_eq!(config.search.effective_step_count(), 6);
    // Not set at project level, so the user layer survives.
    assert_eq!(config.search.effective_top_n(), 3);
}

#[test]
fn explicit_overrides_beat_files() {
    let project_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        project_dir.path().join("pitwall.toml"),
        "[narrowing]\nseed = 1\n",
    )
    .unwrap();
    let overrides = ConfigOverrides {
        seed: Some(99),
        log_level: Some("warn".to_string()),
        ..Default::default()
    };
    let config =
        PitwallConfig::load_with_user_config(None, project_dir.path(), Some(&overrides)).unwrap();
    assert_eq!(config.narrowing.seed, Some(99));
    assert_eq!(config.observability.effective_log_level(), "warn");
}

#[test]
fn invalid_project_file_fails_load() {
    let project_dir = tempfile::tempdir().unwrap();
    std::fs::write(project_dir.path().join("pitwall.toml"), "not = [valid").unwrap();
    let err = PitwallConfig::load_with_user_config(None, project_dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn env_overrides_are_parsed_and_bad_values_ignored() {
    let mut config = PitwallConfig::default();
    PitwallConfig::apply_env_overrides(&mut config, |key| match key {
        "PITWALL_SEARCH_TOP_N" => Some("4".to_string()),
        "PITWALL_NARROWING_SEED" => Some("not-a-number".to_string()),
        "PITWALL_LOG_JSON" => Some("true".to_string()),
        _ => None,
    });
    assert_eq!(config.search.top_n, Some(4));
    assert_eq!(config.narrowing.seed, None);
    assert_eq!(config.observability.json, Some(true));
}

#[test]
fn narrowing_validate_rejects_unusable_values() {
    let cases = [
        ("perturbation_range = -0.2", "narrowing.perturbation_range"),
        ("perturbation_range = nan", "narrowing.perturbation_range"),
        ("optimal_confidence = 120.0", "narrowing.optimal_confidence"),
        ("default_attempt_estimate = 0", "narrowing.default_attempt_estimate"),
        ("pool_step_count = 0", "narrowing.pool_step_count"),
        ("pool_stride = 0", "narrowing.pool_stride"),
    ];
    for (line, expected) in cases {
        let config = PitwallConfig::from_toml(&format!("[narrowing]\n{line}\n")).unwrap();
        match config.narrowing.validate() {
            Err(ConfigError::ValidationFailed { field, .. }) => assert_eq!(field, expected),
            other => panic!("{line}: expected {expected} to be rejected, got {other:?}"),
        }
        assert!(config.validate().is_err(), "{line}");
    }
}

#[test]
fn default_config_validates() {
    assert!(PitwallConfig::default().validate().is_ok());
    assert!(NarrowingConfig::default().validate().is_ok());
    assert!(SearchConfig::default().validate().is_ok());
}

#[test]
fn unreadable_project_file_is_a_read_error() {
    let project_dir = tempfile::tempdir().unwrap();
    // A directory where the file should be: it exists but cannot be read.
    std::fs::create_dir(project_dir.path().join("pitwall.toml")).unwrap();
    let err = PitwallConfig::load_with_user_config(None, project_dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }), "{err:?}");
}
