//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level regdrill configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegdrillConfig {
    /// Where the next level to attempt is stored.
    #[serde(default = "default_level_file")]
    pub level_file: PathBuf,
    /// Fixed RNG seed for reproducible trials.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Text shown when asking whether to play another trial.
    #[serde(default = "default_confirm_prompt")]
    pub confirm_prompt: String,
}

fn default_level_file() -> PathBuf {
    PathBuf::from("level.txt")
}
fn default_confirm_prompt() -> String {
    "Continue (y/n): ".to_string()
}

impl Default for RegdrillConfig {
    fn default() -> Self {
        Self {
            level_file: default_level_file(),
            seed: None,
            confirm_prompt: default_confirm_prompt(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Without a path the search order is:
/// 1. `regdrill.toml` in the current directory
/// 2. `~/.config/regdrill/config.toml`
///
/// Environment variable overrides: `REGDRILL_LEVEL_FILE`, `REGDRILL_SEED`.
pub fn load_config_from(path: Option<&Path>) -> Result<RegdrillConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("regdrill.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            toml::from_str::<RegdrillConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => RegdrillConfig::default(),
    };

    if let Ok(file) = std::env::var("REGDRILL_LEVEL_FILE") {
        config.level_file = PathBuf::from(file);
    }
    if let Ok(seed) = std::env::var("REGDRILL_SEED") {
        let seed = seed
            .trim()
            .parse::<u64>()
            .with_context(|| format!("REGDRILL_SEED is not a number: '{seed}'"))?;
        config.seed = Some(seed);
    }

    config.level_file = PathBuf::from(resolve_env_vars(&config.level_file.to_string_lossy()));

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("regdrill"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_REGDRILL_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_REGDRILL_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_REGDRILL_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        std::env::remove_var("_REGDRILL_TEST_VAR");
    }

    #[test]
    fn unterminated_reference_is_left_alone() {
        assert_eq!(resolve_env_vars("data/${OOPS"), "data/${OOPS");
    }

    #[test]
    fn default_config() {
        let config = RegdrillConfig::default();
        assert_eq!(config.level_file, PathBuf::from("level.txt"));
        assert_eq!(config.seed, None);
        assert_eq!(config.confirm_prompt, "Continue (y/n): ");
    }

    #[test]
    fn parse_partial_config() {
        let config: RegdrillConfig = toml::from_str("seed = 9\n").unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.level_file, PathBuf::from("level.txt"));
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regdrill.toml");
        std::fs::write(
            &path,
            "level_file = \"/tmp/regdrill-level.txt\"\nconfirm_prompt = \"Again? \"\n",
        )
        .unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.confirm_prompt, "Again? ");
        if std::env::var("REGDRILL_LEVEL_FILE").is_err() {
            assert_eq!(config.level_file, PathBuf::from("/tmp/regdrill-level.txt"));
        }
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "seed = \"soon\"").unwrap();
        assert!(load_config_from(Some(&path)).is_err());
    }
}
