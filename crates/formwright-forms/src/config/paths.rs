use std::path::PathBuf;

/// Name used for the config and data directories
pub const APP_NAME: &str = "formwright";

/// Where formwright keeps its config file and logs
///
/// On macOS and Linux:
/// - Config: $XDG_CONFIG_HOME/{name} (default: ~/.config/{name})
/// - Data: $XDG_DATA_HOME/{name} (default: ~/.local/share/{name})
///
/// On Windows both live under %APPDATA%\{name}.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    name: String,
}

impl ProjectPaths {
    /// Returns `None` when no home directory can be determined.
    pub fn new(name: &str) -> Option<Self> {
        home_dir()?;
        Some(ProjectPaths {
            name: name.to_string(),
        })
    }

    pub fn config_dir(&self) -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            windows_appdata_dir(&self.name)
        }

        #[cfg(not(target_os = "windows"))]
        {
            xdg_dir("XDG_CONFIG_HOME", &[".config"], &self.name)
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            windows_appdata_dir(&self.name)
        }

        #[cfg(not(target_os = "windows"))]
        {
            xdg_dir("XDG_DATA_HOME", &[".local", "share"], &self.name)
        }
    }

    /// Default location of `config.toml`
    pub fn config_file(&self) -> PathBuf {
        self.config_dir().join("config.toml")
    }

    /// Directory file logging writes into
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir().join("logs")
    }
}

/// Home directory, from HOME or USERPROFILE.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| std::env::var("USERPROFILE").ok().map(PathBuf::from))
}

/// `$var/{name}`, falling back to `~/{fallback...}/{name}`.
#[cfg(not(target_os = "windows"))]
fn xdg_dir(var: &str, fallback: &[&str], name: &str) -> PathBuf {
    let relative: PathBuf = fallback.iter().collect();
    std::env::var(var)
        .ok()
        .map(PathBuf::from)
        .or_else(|| home_dir().map(|h| h.join(&relative)))
        .unwrap_or(relative)
        .join(name)
}

#[cfg(target_os = "windows")]
fn windows_appdata_dir(name: &str) -> PathBuf {
    std::env::var("APPDATA")
        .ok()
        .map(|p| PathBuf::from(p).join(name))
        .unwrap_or_else(|| PathBuf::from(format!(".{}", name)))
}
