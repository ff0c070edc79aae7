//! Decomposition parameter parsing.

use anyhow::{Context, Result};
use map_plugin::MapConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Decomposition options as read from a TOML file.
///
/// Every field is optional in the file; missing fields take the standard
/// defaults. Out-of-range values are not rejected here - the core clamps
/// them with a warning at decomposition time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Params {
	/// Invert luminance classification.
	pub negative: bool,
	/// Luminance cut between free and occupied (0-255 scale).
	pub threshold: f64,
	/// Extruded box height in world units.
	pub height: f64,
	/// Grid-cell-to-world-unit factor.
	pub scale: f64,
	/// Visual material name, passed through untouched.
	pub material: String,
	/// Minimum region area (cells) before a forced leaf.
	pub granularity: u32,
}

impl Default for Params {
	fn default() -> Self {
		Self {
			negative: false,
			threshold: 200.0,
			height: 1.0,
			scale: 1.0,
			material: String::new(),
			granularity: 5,
		}
	}
}

impl Params {
	/// Load parameters from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read params file: {}", path.display()))?;
		let params: Params =
			toml::from_str(&content).with_context(|| "Failed to parse params TOML")?;
		Ok(params)
	}

	/// Save parameters to a TOML file.
	pub fn save(&self, path: &Path) -> Result<()> {
		let content = toml::to_string_pretty(self).context("Failed to serialize params")?;
		std::fs::write(path, content)
			.with_context(|| format!("Failed to write params file: {}", path.display()))?;
		Ok(())
	}

	/// Convert to the core configuration structure.
	pub fn to_config(&self) -> MapConfig {
		MapConfig {
			negative: self.negative,
			threshold: self.threshold,
			height: self.height,
			scale: self.scale,
			material: self.material.clone(),
			granularity: self.granularity,
		}
	}
}
