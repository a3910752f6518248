//! Locations inside the Zellij plugin sandbox.
//!
//! Zellij mounts the host filesystem under `/host`, usually the directory the
//! session was started from. Paths the user writes with `~` are mapped onto it.

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
const HOST_ROOT: &str = "/host";

/// Directory for files the plugin writes, such as trace output:
/// `/host/.local/share/zellij/shopping-list`.
///
/// ```
/// use shopping_list::infrastructure::data_dir;
///
/// assert_eq!(
///     data_dir().to_str(),
///     Some("/host/.local/share/zellij/shopping-list")
/// );
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local")
        .join("share")
        .join("zellij")
        .join("shopping-list")
}

/// Maps a leading `~` onto the sandbox host mount. Other paths pass through.
///
/// ```
/// use shopping_list::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/nord.toml"), "/host/themes/nord.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}
