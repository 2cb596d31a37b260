use std::path::Path;

use doctalk_cli::config::{has_config, load_config, load_or_init, save_config};

#[test]
fn first_run_creates_profile_and_reuses_it() {
    let dir = tempfile::tempdir().unwrap();
    let data = Path::new("/var/lib/doctalk-test");
    assert!(!has_config(dir.path()));

    let created = load_or_init(dir.path(), data).unwrap();
    assert!(has_config(dir.path()));
    assert_eq!(created.config_version, 1);
    assert_eq!(created.data_dir, data);

    let again = load_or_init(dir.path(), Path::new("/elsewhere")).unwrap();
    assert_eq!(again, created);
}

#[test]
fn v0_config_gains_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "user_id": "user-7", "created_at": "2025-11-02T08:00:00Z" }"#,
    )
    .unwrap();

    let config = load_config(dir.path(), Path::new("/data/doctalk")).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.user_id.as_str(), "user-7");
    assert_eq!(config.data_dir, Path::new("/data/doctalk"));
}

#[test]
fn newer_config_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "config_version": 9, "user_id": "u", "data_dir": "/d", "created_at": "2025-11-02T08:00:00Z" }"#,
    )
    .unwrap();

    let err = load_config(dir.path(), Path::new("/d")).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn version_beyond_u32_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "config_version": 4294967297, "user_id": "u", "data_dir": "/d", "created_at": "2025-11-02T08:00:00Z" }"#,
    )
    .unwrap();

    let err = load_config(dir.path(), Path::new("/d")).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn empty_user_id_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "config_version": 1, "user_id": "", "data_dir": "/d", "created_at": "2025-11-02T08:00:00Z" }"#,
    )
    .unwrap();

    assert!(load_config(dir.path(), Path::new("/d")).is_err());
}

#[test]
fn save_stamps_current_version() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = load_or_init(dir.path(), Path::new("/d")).unwrap();
    config.config_version = 0;
    save_config(dir.path(), &config).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["config_version"], 1);
    assert!(!dir.path().join("config.json.tmp").exists());
}
