// Loads the transiting body from a bitmap and answers "does the planet cover this pixel?".
// Visual expectation: whatever is non-black in object.bmp becomes a dark,
// dithered shape sliding across the star.

use crate::error::Error;
use crate::types::Silhouette;
use image::RgbImage;
use std::path::Path;

/// A decoded red channel counts as planet when it is not zero.
#[inline]
pub fn is_opaque_channel(value: u8) -> bool {
    value != 0
}

impl Silhouette {
    /// Decode the bitmap at `path`. A missing or broken file is fatal for the viewer.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let img = image::open(path)
            .map_err(|source| Error::SilhouetteLoad { path: path.to_path_buf(), source })?
            .to_rgb8();

        let sil = Self::from_rgb(&img);
        if sil.width == 0 || sil.height == 0 {
            return Err(Error::EmptySilhouette { path: path.to_path_buf() });
        }
        tracing::info!(path = %path.display(), width = sil.width, height = sil.height, "silhouette loaded");
        Ok(sil)
    }

    /// Build the mask from an already decoded RGB image (only the red channel matters).
    pub fn from_rgb(img: &RgbImage) -> Self {
        let (w, h) = img.dimensions();
        let opaque = img.pixels().map(|p| is_opaque_channel(p[0])).collect();
        Self { width: w as usize, height: h as usize, opaque }
    }

    /// Planet pixel at (col, row)? Anything outside the bitmap is transparent.
    #[inline]
    pub fn covers(&self, col: i64, row: usize) -> bool {
        if col < 0 || row >= self.height {
            return false;
        }
        let col = col as usize;
        col < self.width && self.opaque[row * self.width + col]
    }
}
