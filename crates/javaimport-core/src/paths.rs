//! Common filesystem paths used by javaimport.

use std::path::PathBuf;

/// Path to the javaimport configuration file.
///
/// Defaults to `~/.config/javaimport/config.toml`, but can be overridden via
/// `JAVAIMPORT_CONFIG` for testing or per-project setups.
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("JAVAIMPORT_CONFIG") {
        return expand(&path);
    }

    expand("~/.config/javaimport/config.toml")
}

/// Expand `~` and environment variables in a user-supplied path.
///
/// Falls back to the literal input when a referenced variable is unset.
pub fn expand(path: &str) -> PathBuf {
    match shellexpand::full(path) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        Err(_) => PathBuf::from(shellexpand::tilde(path).into_owned()),
    }
}

#[doc(hidden)]
pub fn test_env_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
