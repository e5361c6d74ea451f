//! Configuration file discovery and environment overrides

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use tracing::{debug, info};

use crate::config::SplitterConfig;
use crate::domain::model::VideoCodec;
use crate::error::{SplitXError, SplitXResult};

/// Files tried, in order, when no `--config` is given
pub const CONFIG_SEARCH_PATHS: &[&str] = &["splitter.toml", "config/splitter.toml"];

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "SPLITX_";

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    splitter: SplitterConfig,
}

/// Parse one TOML file with a `[splitter]` table
pub fn load_config_file(path: &Path) -> SplitXResult<SplitterConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| SplitXError::ConfigRead {
        path: path.display().to_string(),
        source,
    })?;
    parse_config_toml(&content).map_err(|source| SplitXError::ConfigParse {
        path: path.display().to_string(),
        source,
    })
}

/// Parse TOML content; missing keys keep their defaults
pub fn parse_config_toml(content: &str) -> Result<SplitterConfig, toml::de::Error> {
    let file: ConfigFile = toml::from_str(content)?;
    Ok(file.splitter)
}

/// Builds a `SplitterConfig` from defaults, a TOML file and the environment
pub struct ConfigLoader<F>
where
    F: Fn(&str) -> Option<String>,
{
    env: F,
}

impl ConfigLoader<fn(&str) -> Option<String>> {
    /// Loader reading the process environment
    pub fn from_process_env() -> Self {
        Self {
            env: |name| std::env::var(name).ok(),
        }
    }
}

impl<F> ConfigLoader<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Loader with a custom environment lookup
    pub fn with_env(env: F) -> Self {
        Self { env }
    }

    /// Defaults, then the explicit or first discovered file, then the environment
    pub fn load(&self, explicit_path: Option<&Path>) -> SplitXResult<SplitterConfig> {
        let mut config = match self.locate(explicit_path)? {
            Some(path) => {
                info!("Loading configuration from: {}", path.display());
                load_config_file(&path)?
            }
            None => {
                debug!("No configuration file found, using defaults");
                SplitterConfig::default()
            }
        };

        let overrides = self.apply_env(&mut config)?;
        if overrides > 0 {
            info!("Applied {} environment variable overrides", overrides);
        }

        Ok(config)
    }

    fn locate(&self, explicit_path: Option<&Path>) -> SplitXResult<Option<PathBuf>> {
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(SplitXError::ConfigRead {
                    path: path.display().to_string(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "config file does not exist",
                    ),
                });
            }
            return Ok(Some(path.to_path_buf()));
        }

        Ok(CONFIG_SEARCH_PATHS
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.exists()))
    }

    /// Apply `SPLITX_*` variables, returning how many were applied
    pub fn apply_env(&self, config: &mut SplitterConfig) -> SplitXResult<usize> {
        let mut applied = 0;

        if let Some(value) = self.var("INPUT_FOLDER") {
            config.input_folder = PathBuf::from(value);
            applied += 1;
        }
        if let Some(value) = self.var("OUTPUT_FOLDER") {
            config.output_folder = PathBuf::from(value);
            applied += 1;
        }
        if let Some(value) = self.parsed::<f64>("MIN_CLIP")? {
            config.min_clip_duration = value;
            applied += 1;
        }
        if let Some(value) = self.parsed::<f64>("MAX_CLIP")? {
            config.max_clip_duration = value;
            applied += 1;
        }
        if let Some(value) = self.parsed::<f64>("MIN_GAP")? {
            config.min_gap = value;
            applied += 1;
        }
        if let Some(value) = self.parsed::<f64>("MAX_GAP")? {
            config.max_gap = value;
            applied += 1;
        }
        if let Some(value) = self.parsed::<bool>("MUTE_AUDIO")? {
            config.mute_audio = value;
            applied += 1;
        }
        if let Some(value) = self.var("VIDEO_CODEC") {
            config.video_codec = VideoCodec::parse(&value)?;
            applied += 1;
        }
        if let Some(value) = self.var("REENCODE_ENCODER") {
            config.reencode_encoder = value;
            applied += 1;
        }
        if let Some(value) = self.parsed::<usize>("MAX_THREADS")? {
            config.max_threads = value;
            applied += 1;
        }
        if let Some(value) = self.parsed::<u64>("SEED")? {
            config.seed = Some(value);
            applied += 1;
        }
        if let Some(value) = self.parsed::<bool>("PER_FILE_SUBFOLDER")? {
            config.per_file_subfolder = value;
            applied += 1;
        }

        Ok(applied)
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.env)(&format!("{}{}", ENV_PREFIX, key)).filter(|v| !v.trim().is_empty())
    }

    fn parsed<T: FromStr>(&self, key: &str) -> SplitXResult<Option<T>> {
        match self.var(key) {
            None => Ok(None),
            Some(value) => value
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|_| SplitXError::InvalidEnvOverride {
                    name: format!("{}{}", ENV_PREFIX, key),
                    value,
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn loader(vars: &[(&str, &str)]) -> ConfigLoader<impl Fn(&str) -> Option<String>> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigLoader::with_env(move |name: &str| vars.get(name).cloned())
    }

    #[test]
    fn test_parse_toml_partial_table() {
        let config = parse_config_toml(
            r#"
            [splitter]
            min_clip_duration = 2.5
            video_codec = "reencode"
            extensions = ["mp4"]
            "#,
        )
        .unwrap();

        assert_eq!(config.min_clip_duration, 2.5);
        assert_eq!(config.max_clip_duration, 7.0);
        assert_eq!(config.video_codec, VideoCodec::Reencode);
        assert_eq!(config.extensions, vec!["mp4".to_string()]);
    }

    #[test]
    fn test_parse_toml_without_table_uses_defaults() {
        let config = parse_config_toml("").unwrap();
        assert_eq!(config, SplitterConfig::default());
    }

    #[test]
    fn test_parse_toml_rejects_wrong_types() {
        let result = parse_config_toml("[splitter]\nmin_gap = \"five\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides() {
        let loader = loader(&[
            ("SPLITX_MIN_GAP", "1.5"),
            ("SPLITX_MAX_THREADS", "3"),
            ("SPLITX_MUTE_AUDIO", "false"),
            ("SPLITX_SEED", "77"),
            ("SPLITX_OUTPUT_FOLDER", "/tmp/clips"),
        ]);
        let mut config = SplitterConfig::default();

        assert_eq!(loader.apply_env(&mut config).unwrap(), 5);
        assert_eq!(config.min_gap, 1.5);
        assert_eq!(config.max_threads, 3);
        assert!(!config.mute_audio);
        assert_eq!(config.seed, Some(77));
        assert_eq!(config.output_folder, PathBuf::from("/tmp/clips"));
    }

    #[test]
    fn test_env_override_parse_error() {
        let loader = loader(&[("SPLITX_MAX_THREADS", "many")]);
        let mut config = SplitterConfig::default();
        let err = loader.apply_env(&mut config).unwrap_err();
        assert!(matches!(err, SplitXError::InvalidEnvOverride { .. }));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[splitter]\nmax_gap = 12.0\nseed = 5\n").unwrap();

        let config = loader(&[("SPLITX_SEED", "6")]).load(Some(&path)).unwrap();

        assert_eq!(config.max_gap, 12.0);
        assert_eq!(config.seed, Some(6));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = loader(&[]).load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(SplitXError::ConfigRead { .. })));
    }
}
