use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use directories::ProjectDirs;

pub const DATA_DIR_ENV: &str = "ULTS_DATA_DIR";
pub const LOG_ENV: &str = "ULTS_LOG";
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Where letters live: explicit flag, then `ULTS_DATA_DIR`, then the platform
/// data directory, then `./.unsent-stars`.
pub fn resolve_data_dir(flag: Option<PathBuf>, env: Option<OsString>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Some(dir) = env.filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("", "", "unsent-stars")
        .map_or_else(|| PathBuf::from(".unsent-stars"), |p| p.data_dir().to_path_buf())
}

pub fn data_dir(flag: Option<PathBuf>) -> PathBuf {
    resolve_data_dir(flag, std::env::var_os(DATA_DIR_ENV))
}

/// Any non-empty `NO_COLOR` disables colour, as does `--no-color`.
pub fn resolve_color(no_color_flag: bool, env: Option<&OsStr>) -> bool {
    !no_color_flag && env.is_none_or(OsStr::is_empty)
}

pub fn color_enabled(no_color_flag: bool) -> bool {
    resolve_color(no_color_flag, std::env::var_os(NO_COLOR_ENV).as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_beats_env() {
        let dir = resolve_data_dir(Some("/flag".into()), Some("/env".into()));
        assert_eq!(dir, PathBuf::from("/flag"));
    }

    #[test]
    fn test_env_used_without_flag() {
        assert_eq!(resolve_data_dir(None, Some("/env".into())), PathBuf::from("/env"));
    }

    #[test]
    fn test_empty_env_falls_through() {
        let dir = resolve_data_dir(None, Some(OsString::new()));
        assert_ne!(dir, PathBuf::new());
    }

    #[test]
    fn test_color_switches() {
        assert!(resolve_color(false, None));
        assert!(resolve_color(false, Some(OsStr::new(""))));
        assert!(!resolve_color(false, Some(OsStr::new("1"))));
        assert!(!resolve_color(true, None));
    }
}
