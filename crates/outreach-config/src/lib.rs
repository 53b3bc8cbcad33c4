use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use outreach_core::{ClientStatus, ContactMethod, DEFAULT_SLOT};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "outreach";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub slot: String,
    pub defaults: FormDefaults,
}

/// Values the add form starts from when the user leaves a field unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormDefaults {
    pub contact_method: ContactMethod,
    pub status: ClientStatus,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            slot: DEFAULT_SLOT.to_string(),
            defaults: FormDefaults::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid slot name: {0:?}")]
    InvalidSlot(String),
    #[error("invalid defaults.contact_method value: {0}")]
    InvalidDefaultMethod(String),
    #[error("invalid defaults.status value: {0}")]
    InvalidDefaultStatus(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    slot: Option<String>,
    defaults: Option<DefaultsFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DefaultsFile {
    contact_method: Option<String>,
    status: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(slot) = parsed.slot {
        let trimmed = slot.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidSlot(slot));
        }
        config.slot = trimmed.to_string();
    }

    if let Some(defaults) = parsed.defaults {
        if let Some(raw) = defaults.contact_method {
            config.defaults.contact_method = ContactMethod::from_str(&raw)
                .map_err(|_| ConfigError::InvalidDefaultMethod(raw.clone()))?;
        }
        if let Some(raw) = defaults.status {
            config.defaults.status = ClientStatus::from_str(&raw)
                .map_err(|_| ConfigError::InvalidDefaultStatus(raw.clone()))?;
        }
    }

    Ok(config)
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, AppConfig, ConfigError, ConfigFile, DefaultsFile};
    use outreach_core::{ClientStatus, ContactMethod};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn restrict_permissions(path: &Path) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path).expect("metadata").permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms).expect("chmod");
        }
    }

    #[test]
    fn defaults_match_the_form() {
        let config = AppConfig::default();
        assert_eq!(config.slot, "cobranca_contacts");
        assert_eq!(config.defaults.contact_method, ContactMethod::Phone);
        assert_eq!(config.defaults.status, ClientStatus::InProgress);
    }

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            slot: Some(" leads ".to_string()),
            defaults: Some(DefaultsFile {
                contact_method: Some("whatsapp".to_string()),
                status: Some("negotiating".to_string()),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.slot, "leads");
        assert_eq!(merged.defaults.contact_method, ContactMethod::WhatsApp);
        assert_eq!(merged.defaults.status, ClientStatus::Negotiating);
    }

    #[test]
    fn merge_config_rejects_bad_values() {
        let parsed = ConfigFile {
            slot: Some("  ".to_string()),
            defaults: None,
        };
        assert!(matches!(
            merge_config(parsed).unwrap_err(),
            ConfigError::InvalidSlot(_)
        ));

        let parsed = ConfigFile {
            slot: None,
            defaults: Some(DefaultsFile {
                contact_method: None,
                status: Some("pending".to_string()),
            }),
        };
        assert!(matches!(
            merge_config(parsed).unwrap_err(),
            ConfigError::InvalidDefaultStatus(_)
        ));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
        assert!(load_at_path(&missing, false).expect("optional").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "slot = \"leads\"\n[defaults]\ncontact_method = \"presencial\"\nstatus = \"sem_retorno\"\n",
        )
        .expect("write config");
        restrict_permissions(&path);

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.slot, "leads");
        assert_eq!(config.defaults.contact_method, ContactMethod::InPerson);
        assert_eq!(config.defaults.status, ClientStatus::NoResponse);
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "due_soon_days = 3\n").expect("write config");
        restrict_permissions(&path);

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn load_at_path_rejects_shared_file() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "slot = \"leads\"\n").expect("write config");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).expect("chmod");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::InsecurePermissions(_)));
    }
}
