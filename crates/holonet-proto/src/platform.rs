use std::path::PathBuf;

const APP_DIR: &str = "holonet";

pub fn data_dir() -> PathBuf {
    // ~/.local/share/holonet on macOS too, not Application Support
    #[cfg(unix)]
    {
        dirs::home_dir()
            .unwrap_or_else(temp_dir)
            .join(".local")
            .join("share")
            .join(APP_DIR)
    }
    #[cfg(windows)]
    {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }
}

pub fn config_dir() -> PathBuf {
    #[cfg(unix)]
    {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join(APP_DIR)
    }
    #[cfg(windows)]
    {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }
}

pub fn temp_dir() -> PathBuf {
    std::env::temp_dir()
}

pub fn log_path() -> PathBuf {
    data_dir().join("holonet.log")
}

/// Whether the host platform conventionally uses a bottom tab bar.
///
/// Apple platforms get tabs, everything else a side drawer.
pub fn prefers_tabs() -> bool {
    cfg!(any(target_os = "macos", target_os = "ios"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_are_namespaced() {
        assert!(data_dir().ends_with("holonet"));
        assert!(config_dir().ends_with("holonet"));
        assert!(log_path().ends_with("holonet/holonet.log"));
    }
}
