use crate::error::{Result, StoreError};
use chrono::Local;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "outreach";
const DB_FILENAME: &str = "outreach.sqlite3";

pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("XDG_DATA_HOME") {
        let path = PathBuf::from(dir);
        if path.as_os_str().is_empty() {
            return Err(StoreError::InvalidDataPath(path));
        }
        return Ok(path.join(APP_DIR));
    }

    let home = dirs::home_dir().ok_or(StoreError::MissingHomeDir)?;
    Ok(home.join(".local").join("share").join(APP_DIR))
}

pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = data_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    restrict_dir_permissions(&dir)?;
    Ok(dir)
}

pub fn db_path() -> Result<PathBuf> {
    Ok(ensure_data_dir()?.join(DB_FILENAME))
}

pub fn db_path_in(dir: &Path) -> PathBuf {
    dir.join(DB_FILENAME)
}

pub fn resolve_db_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) if path.as_os_str().is_empty() => Err(StoreError::InvalidDataPath(path)),
        Some(path) => Ok(path),
        None => db_path(),
    }
}

pub fn export_path() -> Result<PathBuf> {
    let stamp = Local::now().format("%Y%m%dT%H%M%S");
    Ok(ensure_data_dir()?.join(format!("outreach-export-{}.json", stamp)))
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Writes `contents` to a file only the owner can read; exports carry client names and
/// phone numbers.
pub fn write_private(path: &Path, contents: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, contents)?;
    restrict_file_permissions(path)
}

#[cfg(unix)]
pub fn restrict_file_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    if path.exists() {
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}

#[cfg(not(unix))]
pub fn restrict_file_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(unix)]
fn restrict_dir_permissions(dir: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o700);
    fs::set_permissions(dir, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_dir_permissions(_dir: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{db_path_in, ensure_parent_dir, resolve_db_path, write_private};
    use crate::error::StoreError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn explicit_db_path_wins() {
        let path = PathBuf::from("/tmp/custom.sqlite3");
        assert_eq!(resolve_db_path(Some(path.clone())).unwrap(), path);
    }

    #[test]
    fn empty_db_path_is_rejected() {
        let err = resolve_db_path(Some(PathBuf::new())).unwrap_err();
        assert!(matches!(err, StoreError::InvalidDataPath(_)));
    }

    #[test]
    fn ensure_parent_dir_creates_missing_directories() {
        let temp = TempDir::new().expect("temp dir");
        let path = db_path_in(&temp.path().join("nested").join("deeper"));
        ensure_parent_dir(&path).expect("parent");
        assert!(path.parent().unwrap().is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn write_private_leaves_owner_only_file() {
        use std::os::unix::fs::PermissionsExt;
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("exports").join("outreach-export.json");
        write_private(&path, "[]").expect("write");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "[]");
        let mode = std::fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
