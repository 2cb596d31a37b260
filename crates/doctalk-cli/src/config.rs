use std::path::{Path, PathBuf};

use doctalk_core::models::UserId;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctalkConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Identity the quiz history is filed under. Generated on first run.
    pub user_id: UserId,
    /// Where quiz history documents live. Added in v1.
    pub data_dir: PathBuf,
    pub created_at: jiff::Timestamp,
}

/// `DOCTALK_CONFIG_DIR`, or `doctalk/` under the platform config dir.
pub fn config_dir() -> eyre::Result<PathBuf> {
    if let Some(dir) = std::env::var_os("DOCTALK_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("doctalk"))
}

/// `doctalk/` under the platform data dir.
pub fn default_data_dir() -> eyre::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join("doctalk"))
}

pub fn has_config(dir: &Path) -> bool {
    dir.join(CONFIG_FILE).exists()
}

pub fn load_config(dir: &Path, default_data_dir: &Path) -> eyre::Result<DoctalkConfig> {
    let path = dir.join(CONFIG_FILE);
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        None => 0,
        Some(v) => u32::try_from(v).map_err(|_| {
            eyre::eyre!(
                "config_version {v} is newer than this build supports ({CURRENT_VERSION}). \
                 Please update DocTalk."
            )
        })?,
    };

    let migrated = migrate(json, on_disk_version, default_data_dir)?;
    let config: DoctalkConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
    default_data_dir: &Path,
) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update DocTalk."
        ));
    }

    // v0 → v1: history location became configurable
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("data_dir").or_insert(serde_json::Value::String(
            default_data_dir.to_string_lossy().into_owned(),
        ));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added data_dir)");
    }

    Ok(json)
}

pub fn save_config(dir: &Path, config: &DoctalkConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

/// Load the config, creating one with a fresh anonymous user on first run.
pub fn load_or_init(dir: &Path, default_data_dir: &Path) -> eyre::Result<DoctalkConfig> {
    if has_config(dir) {
        return load_config(dir, default_data_dir);
    }

    let config = DoctalkConfig {
        config_version: CURRENT_VERSION,
        user_id: UserId::anonymous(),
        data_dir: default_data_dir.to_path_buf(),
        created_at: jiff::Timestamp::now(),
    };
    save_config(dir, &config)?;
    tracing::info!(user = %config.user_id, "created new local profile");
    Ok(config)
}
