//! Runtime configuration: explicit flag, then environment variable, then default.

use crate::{
    error::{Result, SyncError},
    source::{http::SOURCE_URL_ENV_VAR, snapshot::SNAPSHOT_DIR_ENV_VAR},
    storage::{Datastore, DATABASE_ENV_VAR},
};
use std::path::PathBuf;

/// Where a sync run reads its records from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Http(String),
    Snapshot(PathBuf),
}

fn env_value(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

/// Database path from `--database`, `NORTHSCORE_DATABASE`, or the per-user data directory.
pub fn resolve_database_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    database_path_from(flag, env_value(DATABASE_ENV_VAR))
}

fn database_path_from(flag: Option<PathBuf>, env: Option<String>) -> Result<PathBuf> {
    match flag.or_else(|| env.map(PathBuf::from)) {
        Some(path) => Ok(path),
        None => Datastore::default_path(),
    }
}

/// Snapshot directory from `--out`, `NORTHSCORE_SNAPSHOT_DIR`, or the per-user cache directory.
pub fn resolve_snapshot_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    snapshot_dir_from(flag, env_value(SNAPSHOT_DIR_ENV_VAR))
}

fn snapshot_dir_from(flag: Option<PathBuf>, env: Option<String>) -> Result<PathBuf> {
    if let Some(dir) = flag.or_else(|| env.map(PathBuf::from)) {
        return Ok(dir);
    }
    let cache_dir = dirs::cache_dir().ok_or_else(|| SyncError::Config {
        message: "Could not determine cache directory".to_string(),
    })?;
    Ok(cache_dir.join("northscore").join("snapshots"))
}

/// HTTP base URL from `--source-url` or `NORTHSCORE_SOURCE_URL`.
pub fn resolve_source_url(flag: Option<String>) -> Result<String> {
    flag.or_else(|| env_value(SOURCE_URL_ENV_VAR))
        .ok_or_else(|| SyncError::MissingSource {
            env_var: SOURCE_URL_ENV_VAR.to_string(),
        })
}

/// Pick the data source for `sync`. A snapshot directory wins over any URL.
pub fn resolve_source(url: Option<String>, dir: Option<PathBuf>) -> Result<SourceConfig> {
    source_from(url, dir, env_value(SOURCE_URL_ENV_VAR))
}

fn source_from(
    url: Option<String>,
    dir: Option<PathBuf>,
    env: Option<String>,
) -> Result<SourceConfig> {
    if let Some(dir) = dir {
        return Ok(SourceConfig::Snapshot(dir));
    }
    url.or(env)
        .map(SourceConfig::Http)
        .ok_or_else(|| SyncError::MissingSource {
            env_var: SOURCE_URL_ENV_VAR.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_flag_wins() {
        let path = database_path_from(
            Some(PathBuf::from("/tmp/flag.db")),
            Some("/tmp/env.db".to_string()),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/flag.db"));
    }

    #[test]
    fn test_database_env_fallback() {
        let path = database_path_from(None, Some("/tmp/env.db".to_string())).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/env.db"));
    }

    #[test]
    fn test_snapshot_dir_env_fallback() {
        let dir = snapshot_dir_from(None, Some("/tmp/snaps".to_string())).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/snaps"));
    }

    #[test]
    fn test_snapshot_dir_takes_precedence() {
        let source = source_from(
            Some("http://stats.example".to_string()),
            Some(PathBuf::from("/tmp/snaps")),
            None,
        )
        .unwrap();
        assert_eq!(source, SourceConfig::Snapshot(PathBuf::from("/tmp/snaps")));
    }

    #[test]
    fn test_url_flag_before_env() {
        let source = source_from(
            Some("http://flag.example".to_string()),
            None,
            Some("http://env.example".to_string()),
        )
        .unwrap();
        assert_eq!(source, SourceConfig::Http("http://flag.example".to_string()));

        let source = source_from(None, None, Some("http://env.example".to_string())).unwrap();
        assert_eq!(source, SourceConfig::Http("http://env.example".to_string()));
    }

    #[test]
    fn test_missing_source_is_error() {
        let err = source_from(None, None, None).unwrap_err();
        match err {
            SyncError::MissingSource { env_var } => assert_eq!(env_var, SOURCE_URL_ENV_VAR),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
