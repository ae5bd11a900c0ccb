//! Optional TOML tuning overrides for the demo binary.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use rift_delver_system_mapgen::GeneratorTuning;
use serde::Deserialize;

/// Tuning overrides loaded from a TOML file; absent keys keep defaults.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct DemoConfig {
    /// Gravity acceleration override in units per ms².
    pub(crate) gravity: Option<f32>,
    /// One-in-N sparsity chance for the carve; zero disables sparsity.
    pub(crate) sparsity_one_in: Option<u32>,
    /// Percent chance of sealing a door per eligible room.
    pub(crate) blockade_percent: Option<u32>,
    /// Percent chance of accepting a button per placement candidate.
    pub(crate) button_percent: Option<u32>,
}

impl DemoConfig {
    /// Reads and parses a tuning file.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read tuning file at {}", path.display()))?;
        parse_config(&contents)
    }

    /// Generator tuning with the file's overrides applied over defaults.
    pub(crate) fn tuning(&self) -> GeneratorTuning {
        let defaults = GeneratorTuning::default();
        GeneratorTuning {
            sparsity_one_in: self.sparsity_one_in.unwrap_or(defaults.sparsity_one_in),
            blockade_percent: self.blockade_percent.unwrap_or(defaults.blockade_percent),
            button_percent: self.button_percent.unwrap_or(defaults.button_percent),
        }
    }
}

fn parse_config(contents: &str) -> Result<DemoConfig> {
    toml::from_str(contents).context("failed to parse tuning toml contents")
}
