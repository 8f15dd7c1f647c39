//! Flag-driven configuration
//!
//! Every value can come from a command-line flag or from a TOML config file.
//! Flags win over the file, the file wins over built-in defaults.
//!
//! ```toml
//! led-rows = 32
//! led-cols = 64
//! led-chain = 2
//! led-brightness = 60
//! led-backend = "headless"
//! text-color = "#ff8800"
//! ```

use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, ValueEnum};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, info};

use crate::canvas::Color;
use crate::errors::{DisplayError, Result};

/// Which matrix driver to bring up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Emulate the panel in the terminal
    #[default]
    Terminal,
    /// Frame buffer only, frames are logged
    Headless,
}

impl Backend {
    /// Whether stderr log lines would land on the screen this backend draws.
    ///
    /// Only the terminal backend draws, and only when stderr is the same
    /// terminal rather than a pipe or file.
    pub fn logs_would_cover_panel(self, stderr_is_terminal: bool) -> bool {
        self == Self::Terminal && stderr_is_terminal
    }
}

/// Panel geometry and brightness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixOptions {
    /// LED rows per panel
    pub rows: u32,
    /// LED columns per panel
    pub cols: u32,
    /// Panels daisy-chained on one output
    pub chain_length: u32,
    /// Parallel chains
    pub parallel: u32,
    /// Brightness in percent
    pub brightness: u8,
}

impl Default for MatrixOptions {
    fn default() -> Self {
        Self {
            rows: 32,
            cols: 32,
            chain_length: 1,
            parallel: 1,
            brightness: 100,
        }
    }
}

impl MatrixOptions {
    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.cols * self.chain_length
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.rows * self.parallel
    }
}

/// Everything besides the panel itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeOptions {
    pub backend: Backend,
    /// Color of the grid labels
    pub text_color: Color,
    /// How often the idle loop wakes to check for Ctrl-C
    pub poll_interval: Duration,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            backend: Backend::Terminal,
            text_color: Color::WHITE,
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// Fully resolved configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub matrix: MatrixOptions,
    pub runtime: RuntimeOptions,
}

/// Display options as given on the command line or in the config file.
/// Unset fields fall through to the next source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct DisplayFlags {
    /// LED rows per panel
    #[arg(long = "led-rows", value_name = "ROWS")]
    pub led_rows: Option<u32>,

    /// LED columns per panel
    #[arg(long = "led-cols", value_name = "COLS")]
    pub led_cols: Option<u32>,

    /// Number of daisy-chained panels
    #[arg(long = "led-chain", value_name = "N")]
    pub led_chain: Option<u32>,

    /// Number of parallel chains
    #[arg(long = "led-parallel", value_name = "N")]
    pub led_parallel: Option<u32>,

    /// Brightness in percent (1-100)
    #[arg(long = "led-brightness", value_name = "PERCENT")]
    pub led_brightness: Option<u8>,

    /// Matrix driver
    #[arg(long = "led-backend", value_enum, value_name = "BACKEND")]
    pub led_backend: Option<Backend>,

    /// Label color as R,G,B or #RRGGBB
    #[arg(long = "text-color", value_name = "COLOR")]
    pub text_color: Option<Color>,

    /// Idle loop wake-up interval in milliseconds
    #[arg(long = "poll-interval-ms", value_name = "MS")]
    pub poll_interval_ms: Option<u64>,
}

const ROWS_RANGE: RangeInclusive<u32> = 1..=64;
const COLS_RANGE: RangeInclusive<u32> = 1..=128;
const CHAIN_RANGE: RangeInclusive<u32> = 1..=16;
const PARALLEL_RANGE: RangeInclusive<u32> = 1..=3;
const BRIGHTNESS_RANGE: RangeInclusive<u8> = 1..=100;

fn check_range<T>(flag: &'static str, value: T, range: &RangeInclusive<T>) -> Result<T>
where
    T: PartialOrd + Copy + std::fmt::Display,
{
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(DisplayError::InvalidOption {
            flag,
            message: format!(
                "must be between {} and {}, got {value}",
                range.start(),
                range.end()
            ),
        })
    }
}

impl DisplayFlags {
    /// Fill unset fields from `fallback`
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            led_rows: self.led_rows.or(fallback.led_rows),
            led_cols: self.led_cols.or(fallback.led_cols),
            led_chain: self.led_chain.or(fallback.led_chain),
            led_parallel: self.led_parallel.or(fallback.led_parallel),
            led_brightness: self.led_brightness.or(fallback.led_brightness),
            led_backend: self.led_backend.or(fallback.led_backend),
            text_color: self.text_color.or(fallback.text_color),
            poll_interval_ms: self.poll_interval_ms.or(fallback.poll_interval_ms),
        }
    }

    /// Apply defaults and validate ranges
    pub fn resolve(&self) -> Result<Settings> {
        let defaults = Settings::default();

        let matrix = MatrixOptions {
            rows: check_range(
                "led-rows",
                self.led_rows.unwrap_or(defaults.matrix.rows),
                &ROWS_RANGE,
            )?,
            cols: check_range(
                "led-cols",
                self.led_cols.unwrap_or(defaults.matrix.cols),
                &COLS_RANGE,
            )?,
            chain_length: check_range(
                "led-chain",
                self.led_chain.unwrap_or(defaults.matrix.chain_length),
                &CHAIN_RANGE,
            )?,
            parallel: check_range(
                "led-parallel",
                self.led_parallel.unwrap_or(defaults.matrix.parallel),
                &PARALLEL_RANGE,
            )?,
            brightness: check_range(
                "led-brightness",
                self.led_brightness.unwrap_or(defaults.matrix.brightness),
                &BRIGHTNESS_RANGE,
            )?,
        };

        let poll_interval = match self.poll_interval_ms {
            Some(0) => {
                return Err(DisplayError::InvalidOption {
                    flag: "poll-interval-ms",
                    message: "must be at least 1".to_string(),
                })
            }
            Some(ms) => Duration::from_millis(ms),
            None => defaults.runtime.poll_interval,
        };

        let runtime = RuntimeOptions {
            backend: self.led_backend.unwrap_or(defaults.runtime.backend),
            text_color: self.text_color.unwrap_or(defaults.runtime.text_color),
            poll_interval,
        };

        Ok(Settings { matrix, runtime })
    }
}

/// Read display options from a TOML file
pub fn load_file(path: &Path) -> Result<DisplayFlags> {
    let content = fs::read_to_string(path).map_err(|e| DisplayError::ConfigRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let flags = toml::from_str(&content).map_err(|e| DisplayError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!("Loaded config from {}", path.display());
    Ok(flags)
}

/// Default config location, e.g. `~/.config/led-display-test/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "led-display-test").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Command-line interface
#[derive(Debug, Parser)]
#[command(
    name = "led-display-test",
    version,
    about = "Prints each panel's grid position on an LED matrix, then waits for Ctrl-C"
)]
pub struct Cli {
    #[command(flatten)]
    pub display: DisplayFlags,

    /// TOML file with display options (flags take precedence)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at INFO level (stderr; off while the terminal panel is shown)
    #[arg(short, long)]
    pub verbose: bool,

    /// Log at DEBUG level (stderr; off while the terminal panel is shown)
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Merge flags with the config file and validate.
    ///
    /// An explicit `--config` must exist; the default location is only
    /// read when present.
    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => load_file(path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => {
                    info!("Using config {}", path.display());
                    load_file(&path)?
                }
                _ => DisplayFlags::default(),
            },
        };

        self.display.clone().or(file).resolve()
    }
}
