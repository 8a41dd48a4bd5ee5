// The star: limb-darkened brightness profile plus the static background it sits on.
// Visual expectation: a black sky with faint bluish speckles and a big disc
// that is brightest in the middle and dims toward the rim.

use crate::config::TransitConfig;
use crate::types::{FrameBuffer, cool_gray};
use rand::Rng;

/// Radial brightness model of the star inside its 2R x 2R bounding box.
#[derive(Clone, Copy, Debug)]
pub struct StarModel {
    pub radius: i32,
    pub darkening: f32,
}

impl StarModel {
    pub fn new(radius: i32, darkening: f32) -> Self {
        Self { radius, darkening }
    }

    /// Brightness in [0, 255] at (x, y), box-relative (center at (R, R)).
    /// Zero outside the disc and outside the bounding box.
    pub fn luminosity(&self, x: i32, y: i32) -> f32 {
        let d = 2 * self.radius;
        if x < 0 || y < 0 || x >= d || y >= d {
            return 0.0;
        }
        let (dx, dy) = ((x - self.radius) as f32, (y - self.radius) as f32);
        let r = (dx * dx + dy * dy).sqrt();
        let radius = self.radius as f32;
        if r > radius {
            return 0.0;
        }
        let t = r / radius;
        let u = self.darkening;
        // Limb darkening: rounded transit dip instead of a flat bottom.
        255.0 * (1.0 - u + u * (1.0 - t * t).sqrt())
    }
}

/// Output of the one-time background pass.
pub struct Background {
    pub canvas: FrameBuffer,
    /// Summed brightness of the unobscured star (graph normalization).
    pub baseline: f64,
}

/// Paint the sky, the decorative star field and the star disc.
/// Visual: this is the frame you'd see if no planet were passing.
pub fn build_background<R: Rng>(cfg: &TransitConfig, star: &StarModel, rng: &mut R) -> Background {
    let (w, h) = cfg.canvas_size();
    let mut canvas = FrameBuffer::new(w, h);

    // Decoration only; never counted as star light.
    for _ in 0..cfg.star_field_count {
        let brightness = rng.random_range(0..255u8);
        let x = rng.random_range(0..w);
        let y = rng.random_range(0..h);
        canvas.set(x, y, cool_gray(brightness));
    }

    let d = 2 * star.radius;
    let mut baseline = 0.0f64;
    for x in 0..d {
        for y in 0..d {
            let lum = star.luminosity(x, y);
            if lum > 0.0 {
                canvas.set(x as usize + cfg.border_x, y as usize + cfg.border_y, cool_gray(lum as u8));
                baseline += lum as f64;
            }
        }
    }

    Background { canvas, baseline }
}
