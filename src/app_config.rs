use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Settings shared by every corpus tool, read from an optional JSON file.
/// Missing fields fall back to their defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Directory holding one JSON record per verse
    #[serde(default = "default_slok_dir")]
    pub slok_dir: PathBuf,

    /// Output path of the HTML document
    #[serde(default = "default_html_output")]
    pub html_output: PathBuf,

    /// Output path of the Markdown document
    #[serde(default = "default_markdown_output")]
    pub markdown_output: PathBuf,

    /// Grouping tolerances
    #[serde(default)]
    pub grouping: GroupingConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Tolerances for judging two commentary texts equivalent
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GroupingConfig {
    /// Similarity ratio that must be exceeded (0.0 to 1.0)
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Maximum size of the symmetric difference of the token sets
    #[serde(default = "default_max_token_difference")]
    pub max_token_difference: usize,

    /// Maximum difference in token count
    #[serde(default = "default_max_length_difference")]
    pub max_length_difference: usize,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            max_token_difference: default_max_token_difference(),
            max_length_difference: default_max_length_difference(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Config file looked up in the install root when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "slokwai.json";

/// Directory of the running executable, used as the default install root
pub fn install_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("Executable {:?} has no parent directory", exe))
}

fn default_slok_dir() -> PathBuf {
    PathBuf::from("slok")
}

fn default_html_output() -> PathBuf {
    PathBuf::from("bhagavad_gita_rams.html")
}

fn default_markdown_output() -> PathBuf {
    PathBuf::from("bhagavad_gita_rams.md")
}

fn default_similarity_threshold() -> f64 {
    0.965
}

fn default_max_token_difference() -> usize {
    2
}

fn default_max_length_difference() -> usize {
    3
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the file is absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Anchor relative corpus and output paths at `root`; absolute paths are kept
    pub fn resolve_relative_to<P: AsRef<Path>>(&mut self, root: P) {
        let root = root.as_ref();
        for path in [&mut self.slok_dir, &mut self.html_output, &mut self.markdown_output] {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let threshold = self.grouping.similarity_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(anyhow!(
                "Similarity threshold must be between 0.0 and 1.0, got {}",
                threshold
            ));
        }

        for (name, path) in [
            ("slok_dir", &self.slok_dir),
            ("html_output", &self.html_output),
            ("markdown_output", &self.markdown_output),
        ] {
            if path.as_os_str().is_empty() {
                return Err(anyhow!("Configuration path '{}' must not be empty", name));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            slok_dir: default_slok_dir(),
            html_output: default_html_output(),
            markdown_output: default_markdown_output(),
            grouping: GroupingConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
