//! MapConfig - decomposition options and their safety clamps.

use tracing::warn;

/// Options controlling one decomposition run.
///
/// All fields have safe defaults; [`MapConfig::sanitized`] recovers from
/// out-of-range values rather than failing, so a bad option never aborts a
/// load.
#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
  /// Invert luminance before classification.
  pub negative: bool,

  /// Luminance cut between free and occupied, on the 0-255 scale.
  pub threshold: f64,

  /// Extruded wall height in world units.
  pub height: f64,

  /// Grid-cell-to-world-unit factor.
  pub scale: f64,

  /// Visual material name, passed through to emitted boxes untouched.
  pub material: String,

  /// Minimum region area (cells) before a leaf is forced.
  pub granularity: u32,
}

impl MapConfig {
  /// Copy of this config with every out-of-range value clamped to a safe
  /// positive default. Each clamp is logged as a warning.
  pub fn sanitized(&self) -> Self {
    let mut config = self.clone();
    if !(config.scale > 0.0) {
      warn!(scale = config.scale, "non-positive scale, clamping to 0.1");
      config.scale = 0.1;
    }
    if !(config.threshold > 0.0) {
      warn!(
        threshold = config.threshold,
        "non-positive threshold, clamping to 200.0"
      );
      config.threshold = 200.0;
    }
    if !(config.height > 0.0) {
      warn!(height = config.height, "non-positive height, clamping to 1.0");
      config.height = 1.0;
    }
    if config.granularity == 0 {
      warn!("zero granularity, clamping to 1");
      config.granularity = 1;
    }
    config
  }
}

impl Default for MapConfig {
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
