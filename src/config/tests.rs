use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use super::SettingsError;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_tracklist_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("TRACKLIST_CONFIG_PATH", "/tmp/tracklist-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/tracklist-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/xdg-config-home")
            .join("tracklist")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("tracklist")
            .join("config.toml")
    );
}

#[test]
fn defaults_match_a_flat_mp3_folder() {
    let s = Settings::default();
    assert_eq!(s.library.folder, PathBuf::from("audio"));
    assert!(!s.library.recursive);
    assert!(!s.library.include_hidden);
    assert!(s.library.follow_links);
    assert_eq!(s.library.max_depth, None);
    assert_eq!(s.log.level, "info");
    assert!(s.validate().is_ok());
}

#[test]
fn schema_parses_partial_toml_with_defaults() {
    let s: Settings = toml::from_str(
        r#"
[library]
recursive = true
max_depth = 3
"#,
    )
    .unwrap();
    assert!(s.library.recursive);
    assert_eq!(s.library.max_depth, Some(3));
    assert_eq!(s.library.folder, PathBuf::from("audio"));
    assert_eq!(s.log.level, "info");
}

#[test]
fn validate_rejects_zero_depth_and_blank_level() {
    let mut s = Settings::default();
    s.library.max_depth = Some(0);
    assert!(matches!(
        s.validate(),
        Err(SettingsError::Invalid("library.max_depth must be >= 1"))
    ));

    let mut s = Settings::default();
    s.log.level = "  ".to_string();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.folder = PathBuf::new();
    assert!(s.validate().is_err());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
folder = "/srv/music"
recursive = true
include_hidden = true
follow_links = false

[log]
level = "debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("TRACKLIST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("TRACKLIST__LOG__LEVEL");

    let s = Settings::load().unwrap();
    assert_eq!(s.library.folder, PathBuf::from("/srv/music"));
    assert!(s.library.recursive);
    assert!(s.library.include_hidden);
    assert!(!s.library.follow_links);
    assert_eq!(s.log.level, "debug");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[log]
level = "debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("TRACKLIST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("TRACKLIST__LOG__LEVEL", "warn");

    let s = Settings::load().unwrap();
    assert_eq!(s.log.level, "warn");
}

#[test]
fn load_checked_rejects_a_file_that_fails_validation() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "[library]\nmax_depth = 0\n").unwrap();

    let _g1 = EnvGuard::set("TRACKLIST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("TRACKLIST__LOG__LEVEL");

    assert_eq!(Settings::load().unwrap().library.max_depth, Some(0));
    let err = Settings::load_checked().unwrap_err();
    assert_eq!(err.to_string(), "invalid config: library.max_depth must be >= 1");
}

#[test]
fn load_checked_reports_unparsable_values_as_load_errors() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "[library]\nrecursive = \"sometimes\"\n").unwrap();

    let _g1 = EnvGuard::set("TRACKLIST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("TRACKLIST__LOG__LEVEL");

    assert!(matches!(Settings::load_checked(), Err(SettingsError::Load(_))));
}
