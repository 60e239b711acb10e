use std::path::Path;

use crate::error::Error;

/// Project configuration loaded from `.daggermap.toml` in the scan root.
/// Include/exclude patterns are path prefixes applied to source files
/// relative to the root; `exclude_dirs` are directory names skipped
/// entirely during the walk.
pub struct Config {
    include: Vec<String>,
    exclude: Vec<String>,
    exclude_dirs: Vec<String>,
    extensions: Vec<String>,
}

/// Raw TOML structure for `.daggermap.toml`.
#[derive(serde::Deserialize)]
struct DaggermapTomlConfig {
    #[serde(default)]
    include: Vec<String>,
    #[serde(default)]
    exclude: Vec<String>,
    #[serde(default)]
    exclude_dirs: Option<Vec<String>>,
    #[serde(default)]
    extensions: Option<Vec<String>>,
}

impl Config {
    /// Load config from `.daggermap.toml` in the given root directory.
    /// Returns defaults that scan everything if the file doesn't exist.
    /// Returns an error if the file exists but is malformed, never
    /// silently falling back to defaults when the user wrote a config file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(".daggermap.toml");
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::defaults()),
            Err(e) => return Err(Error::Io(e)),
        };

        let raw: DaggermapTomlConfig = toml::from_str(&content)?;
        Ok(Self {
            include: raw.include,
            exclude: raw.exclude,
            exclude_dirs: raw.exclude_dirs.unwrap_or_else(default_exclude_dirs),
            extensions: raw.extensions.unwrap_or_else(default_extensions),
        })
    }

    /// Default config: every java/kt file outside `build` directories.
    fn defaults() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            exclude_dirs: default_exclude_dirs(),
            extensions: default_extensions(),
        }
    }

    /// Check whether a source file path (relative to the scan root)
    /// should be scanned.
    ///
    /// A path is included if no include patterns are set (scan
    /// everything), or if the path starts with at least one include
    /// pattern. An included path is then excluded if it starts with any
    /// exclude pattern.
    pub fn should_scan(&self, relative_path: &str) -> bool {
        let included = self.include.is_empty()
            || self.include.iter().any(|p| relative_path.starts_with(p.as_str()));

        if !included {
            return false;
        }

        !self.exclude.iter().any(|p| relative_path.starts_with(p.as_str()))
    }

    /// Check whether a directory name is pruned from the walk.
    pub fn is_excluded_dir(&self, dir_name: &str) -> bool {
        self.exclude_dirs.iter().any(|d| d == dir_name)
    }

    /// Check whether a file extension marks a source file.
    pub fn is_source_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }
}

/// Build artifacts live under `build` in Gradle projects.
fn default_exclude_dirs() -> Vec<String> {
    vec!["build".to_string()]
}

fn default_extensions() -> Vec<String> {
    vec!["java".to_string(), "kt".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_scan_everything() {
        let config = Config::defaults();
        assert!(config.should_scan("app/src/main/java/Foo.java"));
        assert!(config.is_excluded_dir("build"));
        assert!(!config.is_excluded_dir("src"));
        assert!(config.is_source_extension("java"));
        assert!(config.is_source_extension("kt"));
        assert!(!config.is_source_extension("kts"));
    }

    #[test]
    fn include_and_exclude_prefixes_filter_paths() {
        let config = Config {
            include: vec!["app/".to_string()],
            exclude: vec!["app/test/".to_string()],
            exclude_dirs: default_exclude_dirs(),
            extensions: default_extensions(),
        };

        assert!(config.should_scan("app/src/Foo.java"));
        assert!(!config.should_scan("lib/src/Foo.java"));
        assert!(!config.should_scan("app/test/FooTest.java"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".daggermap.toml"), "include = 3").unwrap();

        let result = Config::load(dir.path());
        assert!(matches!(result, Err(Error::TomlDe(_))));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(config.should_scan("anything/Foo.kt"));
    }
}
