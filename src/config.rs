use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::pm::PackageManager;

pub const CONFIG_FILE_NAME: &str = ".pmdetect.json";
pub const FALLBACK_ENV: &str = "PMDETECT_FALLBACK";

/// Project-local settings, read from `<dir>/.pmdetect.json`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fallback: Option<PackageManager>,
}

impl Config {
    pub fn load(dir: &Path) -> Result<Config> {
        let p = file_path(dir);
        let b = match fs::read(&p) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(e).with_context(|| format!("read {}", p.display())),
        };
        serde_json::from_slice(&b).with_context(|| format!("parse {}", p.display()))
    }
}

/// Flag, then `PMDETECT_FALLBACK`, then the config file, then npm.
pub fn resolve_fallback(dir: &Path, flag: Option<PackageManager>) -> Result<PackageManager> {
    let env_val = std::env::var(FALLBACK_ENV).ok();
    resolve_fallback_from(dir, flag, env_val.as_deref())
}

fn resolve_fallback_from(
    dir: &Path,
    flag: Option<PackageManager>,
    env_val: Option<&str>,
) -> Result<PackageManager> {
    if let Some(m) = flag {
        return Ok(m);
    }
    if let Some(v) = env_val.map(str::trim).filter(|v| !v.is_empty()) {
        return v
            .parse::<PackageManager>()
            .with_context(|| format!("invalid {FALLBACK_ENV}"));
    }
    let cfg = Config::load(dir)?;
    Ok(cfg.fallback.unwrap_or_default())
}

fn file_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_cfg(td: &TempDir, body: &str) {
        fs::write(td.path().join(CONFIG_FILE_NAME), body).unwrap();
    }

    #[test]
    fn missing_file_defaults_to_npm() {
        let td = TempDir::new().unwrap();
        assert!(Config::load(td.path()).unwrap().fallback.is_none());
        assert_eq!(
            resolve_fallback_from(td.path(), None, None).unwrap(),
            PackageManager::Npm
        );
    }

    #[test]
    fn file_sets_fallback_and_ignores_unknown_fields() {
        let td = TempDir::new().unwrap();
        write_cfg(&td, r#"{"fallback":"pnpm","extra":true}"#);
        assert_eq!(
            resolve_fallback_from(td.path(), None, None).unwrap(),
            PackageManager::Pnpm
        );
    }

    #[test]
    fn flag_beats_env_beats_file() {
        let td = TempDir::new().unwrap();
        write_cfg(&td, r#"{"fallback":"pnpm"}"#);

        let m = resolve_fallback_from(td.path(), Some(PackageManager::Npm), Some("yarn")).unwrap();
        assert_eq!(m, PackageManager::Npm);

        let m = resolve_fallback_from(td.path(), None, Some("yarn")).unwrap();
        assert_eq!(m, PackageManager::Yarn);

        let m = resolve_fallback_from(td.path(), None, Some("  ")).unwrap();
        assert_eq!(m, PackageManager::Pnpm);
    }

    #[test]
    fn invalid_inputs_are_errors() {
        let td = TempDir::new().unwrap();
        assert!(resolve_fallback_from(td.path(), None, Some("bun")).is_err());

        write_cfg(&td, r#"{"fallback":"bun"}"#);
        let err = resolve_fallback_from(td.path(), None, None).unwrap_err();
        assert!(format!("{err}").contains("parse"));
    }
}
