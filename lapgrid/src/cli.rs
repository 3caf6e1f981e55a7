//! Command-line arguments and the JSON config file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use lapgrid_search::{Collision, Heuristic, SearchConfig};
use lapgrid_track::{Track, TrackError};
use serde::Deserialize;
use serde_json::Value;

use crate::track_data;

/// Errors that stop the CLI before a search runs.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid track: {0}")]
    Track(#[from] TrackError),

    #[error("failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
}

const AFTER_HELP: &str = "\
CONFIGURATION:
    Every key of the JSON config file is optional:
    - track: matrix of 0 (open), 1 (boundary), 2 (obstacle), 3 (start)
    - min_loop_moves, min_visited, max_speed, max_expansions: integers
    - timeout: {\"secs\": N, \"nanos\": N}
    - heuristic: \"PenaltySum\" or \"Zero\"
    - collision: \"Landing\" or \"Swept\"
    Command-line options override the file.

EXIT STATUS:
    0 lap found, 1 bad arguments, config or track, 2 no lap found or budget hit";

/// Find the shortest closed lap on a grid racetrack.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "lapgrid", version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Args {
    /// JSON config file (track and search settings)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Minimum moves per lap [default: 40]
    #[arg(long = "min-moves", value_name = "N")]
    pub min_loop_moves: Option<u32>,

    /// Minimum distinct cells per lap [default: 30]
    #[arg(long, value_name = "N")]
    pub min_visited: Option<u32>,

    /// Top speed in cells per move [default: 3]
    #[arg(long, value_name = "N")]
    pub max_speed: Option<u8>,

    /// Stop after expanding N states
    #[arg(long, value_name = "N")]
    pub max_expansions: Option<usize>,

    /// Stop after N seconds
    #[arg(long, value_name = "N")]
    pub timeout_secs: Option<u64>,

    /// Check every cell a move passes over, not just the landing cell
    #[arg(long)]
    pub swept: bool,

    /// Uniform-cost search, which proves the minimum
    #[arg(long)]
    pub exhaustive: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// File settings with command-line overrides applied on top.
    pub fn search_config(&self, file: &FileConfig) -> SearchConfig {
        let mut config = file.search.clone();
        if let Some(n) = self.min_loop_moves {
            config = config.with_min_loop_moves(n);
        }
        if let Some(n) = self.min_visited {
            config = config.with_min_visited(n);
        }
        if let Some(n) = self.max_speed {
            config = config.with_max_speed(n);
        }
        if let Some(n) = self.max_expansions {
            config = config.with_max_expansions(n);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if self.swept {
            config = config.with_collision(Collision::Swept);
        }
        if self.exhaustive {
            config = config.with_heuristic(Heuristic::Zero);
        }
        config
    }
}

/// Top-level keys understood in the config file.
const CONFIG_KEYS: &[&str] = &[
    "track",
    "min_loop_moves",
    "min_visited",
    "max_speed",
    "heuristic",
    "collision",
    "max_expansions",
    "timeout",
];

/// Contents of the JSON config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Replacement for the built-in course.
    pub track: Option<Vec<Vec<i32>>>,
    #[serde(flatten)]
    pub search: SearchConfig,
}

impl FileConfig {
    /// Parse a config document. Unknown keys are logged and ignored.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        for key in unknown_keys(&value) {
            log::warn!("ignoring unknown config key {key:?}");
        }
        serde_json::from_value(value)
    }
}

/// Top-level keys of `value` that the config file does not define.
pub fn unknown_keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .map(|obj| {
            obj.keys()
                .map(String::as_str)
                .filter(|k| !CONFIG_KEYS.contains(k))
                .collect()
        })
        .unwrap_or_default()
}

/// Read and parse the config file at `path`.
pub fn load_config(path: &Path) -> Result<FileConfig, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = FileConfig::from_json(&text).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// The config's track, or the built-in course.
pub fn build_track(file: &FileConfig) -> Result<Track, CliError> {
    let track = match &file.track {
        Some(rows) => Track::from_rows(rows)?,
        None => track_data::default_track()?,
    };
    Ok(track)
}
