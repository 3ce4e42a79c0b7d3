use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable that overrides the store directory.
pub const STORE_ENV: &str = "JOTTER_STORE";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub store: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub reset_corrupt: bool,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            store: other.store.clone().or_else(|| self.store.clone()),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
            reset_corrupt: self.reset_corrupt || other.reset_corrupt,
        }
    }

    /// Store directory: flag, then `JOTTER_STORE`, then the platform data dir.
    pub fn store_dir(&self) -> PathBuf {
        self.store
            .clone()
            .or_else(|| std::env::var_os(STORE_ENV).map(PathBuf::from))
            .unwrap_or_else(default_store_dir)
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("jotter").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("jotter")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("jotter").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("jotter").join("config");
        }
    }

    PathBuf::from(".jotterrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".jotterrc")
}

pub fn default_store_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("jotter");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("jotter");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("jotter");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".local").join("share").join("jotter");
        }
    }

    PathBuf::from(".jotter")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# jotter defaults (saved with --save-defaults)".to_string());
    if let Some(store) = &flags.store {
        lines.push(format!("--store {}", store.display()));
    }
    if let Some(log_file) = &flags.log_file {
        lines.push(format!("--log-file {}", log_file.display()));
    }
    if flags.reset_corrupt {
        lines.push("--reset-corrupt".to_string());
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the persistable flags out of raw argument tokens. Unknown tokens
/// (subcommands, note text) are ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--" {
            break;
        } else if token == "--reset-corrupt" {
            flags.reset_corrupt = true;
        } else if token == "--store" {
            if let Some(next) = tokens.get(i + 1) {
                flags.store = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--store=") {
            flags.store = Some(PathBuf::from(value));
        } else if token == "--log-file" {
            if let Some(next) = tokens.get(i + 1) {
                flags.log_file = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--log-file=") {
            flags.log_file = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "jotter".to_string(),
            "--store".to_string(),
            "/tmp/notes".to_string(),
            "--log-file=jotter.log".to_string(),
            "--reset-corrupt".to_string(),
            "list".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.store, Some(PathBuf::from("/tmp/notes")));
        assert_eq!(flags.log_file, Some(PathBuf::from("jotter.log")));
        assert!(flags.reset_corrupt);
    }

    #[test]
    fn test_parse_flag_tokens_stops_at_double_dash() {
        let args = vec![
            "jotter".to_string(),
            "add".to_string(),
            "--".to_string(),
            "--store".to_string(),
            "is note text".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.store, None);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            store: Some(PathBuf::from("file-store")),
            reset_corrupt: true,
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            store: Some(PathBuf::from("cli-store")),
            log_file: Some(PathBuf::from("cli.log")),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert_eq!(merged.store, Some(PathBuf::from("cli-store")));
        assert_eq!(merged.log_file, Some(PathBuf::from("cli.log")));
        assert!(merged.reset_corrupt);
    }

    #[test]
    fn test_store_flag_wins_over_default_dir() {
        let flags = ConfigFlags {
            store: Some(PathBuf::from("explicit")),
            ..ConfigFlags::default()
        };
        assert_eq!(flags.store_dir(), PathBuf::from("explicit"));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config");
        let flags = ConfigFlags {
            store: Some(PathBuf::from("/srv/notes")),
            log_file: Some(PathBuf::from("jotter.log")),
            reset_corrupt: true,
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }
}
