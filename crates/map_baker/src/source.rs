//! Image-backed pixel source.

use anyhow::{Context, Result};
use image::RgbImage;
use map_plugin::PixelSource;
use std::path::Path;

/// Pixel source decoded from an image file.
///
/// The decoded image is held as 8-bit RGB; samples are normalized on read.
pub struct ImageSource {
	pixels: RgbImage,
}

impl ImageSource {
	/// Decode an image file.
	///
	/// An unreadable or undecodable file is fatal - no geometry is produced
	/// from a partially loaded map.
	pub fn open(path: &Path) -> Result<Self> {
		let image = image::open(path)
			.with_context(|| format!("Failed to open map image: {}", path.display()))?;
		Ok(Self {
			pixels: image.to_rgb8(),
		})
	}
}

impl PixelSource for ImageSource {
	fn width(&self) -> u32 {
		self.pixels.width()
	}

	fn height(&self) -> u32 {
		self.pixels.height()
	}

	fn rgb(&self, x: u32, y: u32) -> [f32; 3] {
		let p = self.pixels.get_pixel(x, y);
		[
			f32::from(p[0]) / 255.0,
			f32::from(p[1]) / 255.0,
			f32::from(p[2]) / 255.0,
		]
	}
}
