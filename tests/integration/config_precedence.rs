use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use wayfare::config::ConfigLoader;
use wayfare::error::ApiError;

use super::support::{with_env, with_xdg_env};

#[test]
fn defaults_apply_without_any_files() {
    let temp = TempDir::new().unwrap();
    with_xdg_env(temp.path(), || {
        let config = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(config.listing.default_limit, 10);
        assert_eq!(config.listing.max_limit, 100);
        assert_eq!(config.logging.level, "warn");

        let path = config.storage.resolve_bookings_path(temp.path()).unwrap();
        assert_eq!(path, temp.path().join("xdg-data/wayfare/bookings.json"));
    });
}

#[test]
fn workspace_file_overrides_global_file() {
    let temp = TempDir::new().unwrap();
    let global_dir = temp.path().join("xdg-config/wayfare");
    fs::create_dir_all(&global_dir).unwrap();
    fs::write(
        global_dir.join("config.toml"),
        "[listing]\ndefault_limit = 15\nmax_limit = 30\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("wayfare.toml"),
        "[listing]\ndefault_limit = 25\n",
    )
    .unwrap();

    with_xdg_env(temp.path(), || {
        let config = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(config.listing.default_limit, 25);
        assert_eq!(config.listing.max_limit, 30);
    });
}

#[test]
fn environment_overrides_files() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("wayfare.toml"),
        "[storage]\nbookings_file = \"from-file.json\"\n",
    )
    .unwrap();

    let config_home = temp.path().join("xdg-config");
    with_env(
        &[
            ("XDG_CONFIG_HOME", config_home.as_os_str()),
            ("WAYFARE__STORAGE__BOOKINGS_FILE", OsStr::new("from-env.json")),
        ],
        || {
            let config = ConfigLoader::load(temp.path()).unwrap();
            assert_eq!(config.storage.bookings_file, PathBuf::from("from-env.json"));
        },
    );
}

#[test]
fn invalid_listing_limits_are_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("wayfare.toml"),
        "[listing]\ndefault_limit = 500\nmax_limit = 100\n",
    )
    .unwrap();

    with_xdg_env(temp.path(), || {
        assert!(matches!(
            ConfigLoader::load(temp.path()),
            Err(ApiError::ConfigError(_))
        ));
    });
}
