//! Command line and config file.
//!
//! ```toml
//! [scene]
//! radius        = 2.0
//! zone_distance = 12.0
//! angle         = 1.0471975511965976   # radians
//! y_adjust      = 1.5
//! x_adjust      = 5.0
//! zoom          = 1.5
//!
//! [keys]
//! advance = "ArrowRight"
//! retreat = "ArrowLeft"
//!
//! [columns]
//! positions  = 1
//! actions    = 2
//! cargo      = 3
//! studs_left = 4
//! ```
//!
//! Every table and key is optional.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rr_core::SceneConfig;
use rr_log::LogColumns;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "replay-viewer", about = "Step through a recorded robot task log")]
pub struct Cli {
    /// Task log CSV.
    pub log: PathBuf,

    /// TOML file with [scene], [keys], and [columns] tables.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Row shown on the first advance (default 0).
    #[arg(long)]
    pub start: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ViewerConfig {
    pub scene:   SceneConfig,
    pub keys:    KeyBindings,
    pub columns: ColumnConfig,
}

/// egui key names, as accepted by `egui::Key::from_name`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    pub advance: String,
    pub retreat: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            advance: "ArrowRight".into(),
            retreat: "ArrowLeft".into(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ColumnConfig {
    pub positions:  usize,
    pub actions:    usize,
    pub cargo:      usize,
    pub studs_left: usize,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        let d = LogColumns::default();
        Self {
            positions:  d.positions,
            actions:    d.actions,
            cargo:      d.cargo,
            studs_left: d.studs_left,
        }
    }
}

impl From<ColumnConfig> for LogColumns {
    fn from(c: ColumnConfig) -> Self {
        LogColumns {
            positions:  c.positions,
            actions:    c.actions,
            cargo:      c.cargo,
            studs_left: c.studs_left,
        }
    }
}

impl ViewerConfig {
    /// Read `path`, or fall back to defaults when no file was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
