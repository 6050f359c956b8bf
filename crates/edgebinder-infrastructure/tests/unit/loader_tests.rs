//! Configuration loader tests

use edgebinder_infrastructure::ConfigLoader;
use edgebinder_infrastructure::constants::DEFAULT_LOG_LEVEL;
use figment::Jail;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new()
            .with_config_path("does-not-exist.toml")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert!(config.tree.get("edgebinder").is_none());
        Ok(())
    });
}

#[test]
fn test_default_file_is_discovered() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "edgebinder.toml",
            r#"
                [logging]
                level = "debug"

                [edgebinder.default]
                adapter = "memory"
                max_bindings = 10

                [edgebinder.analytics]
                adapter = "null"
            "#,
        )?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.tree["edgebinder"],
            json!({
                "default": {"adapter": "memory", "max_bindings": 10},
                "analytics": {"adapter": "null"}
            })
        );
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "edgebinder.toml",
            r#"
                [edgebinder.analytics]
                adapter = "null"
            "#,
        )?;
        jail.set_env("EDGEBINDER_EDGEBINDER__ANALYTICS__ADAPTER", "memory");
        jail.set_env("EDGEBINDER_LOGGING__LEVEL", "warn");
        jail.set_env("EDGEBINDER_LOG", "trace");

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.tree["edgebinder"]["analytics"]["adapter"], "memory");
        assert_eq!(config.logging.level, "warn");
        assert!(config.tree.get("log").is_none());
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("EDGEBINDER_LOGGING__LEVEL", "loud");

        let result = ConfigLoader::new().load();

        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn test_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    std::fs::write(&path, "[edgebinder]\nadapter = \"memory\"\n").unwrap();

    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("EDGEBINDER_LOADER_TEST");
    let config = loader.load().unwrap();

    assert_eq!(loader.config_path(), Some(path.as_path()));
    assert_eq!(config.tree["edgebinder"], json!({"adapter": "memory"}));
}
