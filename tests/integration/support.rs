use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::sync::Mutex;

use wayfare::booking::{BookingFields, BookingStore};

// Environment is process-global; tests that touch it take this lock.
static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn booking(name: &str, amount: f64) -> BookingFields {
    BookingFields {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "+975 2 000 000".to_string(),
        country: Some("Bhutan".to_string()),
        guests: 2,
        amount,
        note: None,
        visit_date: None,
    }
}

pub fn open_store(dir: &Path) -> BookingStore {
    BookingStore::open(dir.join("bookings.json"))
}

/// Run `f` with the given variables set, restoring previous values afterwards.
pub fn with_env<V, F, R>(vars: &[(&str, V)], f: F) -> R
where
    V: AsRef<OsStr>,
    F: FnOnce() -> R,
{
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let saved: Vec<(String, Option<OsString>)> = vars
        .iter()
        .map(|(key, _)| (key.to_string(), std::env::var_os(key)))
        .collect();
    for (key, value) in vars {
        std::env::set_var(key, value.as_ref());
    }

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    for (key, value) in saved {
        match value {
            Some(v) => std::env::set_var(&key, v),
            None => std::env::remove_var(&key),
        }
    }
    match result {
        Ok(r) => r,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

/// Point the XDG roots at `root` so no user configuration leaks into a test.
pub fn with_xdg_env<F, R>(root: &Path, f: F) -> R
where
    F: FnOnce() -> R,
{
    let config_home = root.join("xdg-config");
    let data_home = root.join("xdg-data");
    with_env(
        &[
            ("XDG_CONFIG_HOME", config_home.as_os_str()),
            ("XDG_DATA_HOME", data_home.as_os_str()),
        ],
        f,
    )
}
