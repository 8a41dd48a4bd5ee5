// Compile-time knobs for the transit scene.
// Visual: change these and rebuild to get a bigger star, a taller graph, etc.

use std::path::PathBuf;

pub const STAR_RADIUS: i32 = 220;
pub const LIMB_DARKENING: f32 = 0.65;
pub const BORDER_X: usize = 250;
pub const BORDER_Y: usize = 17;
pub const GRAPH_HEIGHT: usize = 200;
pub const STAR_FIELD_COUNT: usize = 600;
pub const STAR_FIELD_SEED: u64 = 1;
pub const GRAPH_SCALE: f32 = 3.5;
pub const GRAPH_MARGIN: f32 = 10.0;
pub const MARKER_RADIUS: i32 = 1;
pub const SILHOUETTE_PATH: &str = "object.bmp";
pub const WINDOW_TITLE: &str = "BTW, Gagarin was a superhero";

/// Everything the renderer needs to lay out the scene.
#[derive(Debug, Clone)]
pub struct TransitConfig {
    pub star_radius: i32,     // R: disc radius in pixels
    pub limb_darkening: f32,  // u: 0 = flat disc, 1 = black rim
    pub border_x: usize,      // empty space left/right of the star
    pub border_y: usize,      // empty space above/below the star
    pub graph_height: usize,  // brightness plot strip under the star
    pub star_field_count: usize,
    pub star_field_seed: u64,
    /// Vertical stretch of the brightness plot. Tuned by eye.
    pub graph_scale: f32,
    pub graph_margin: f32,
    pub marker_radius: i32,
    pub silhouette_path: PathBuf,
    pub window_title: String,
}

impl Default for TransitConfig {
    fn default() -> Self {
        Self {
            star_radius: STAR_RADIUS,
            limb_darkening: LIMB_DARKENING,
            border_x: BORDER_X,
            border_y: BORDER_Y,
            graph_height: GRAPH_HEIGHT,
            star_field_count: STAR_FIELD_COUNT,
            star_field_seed: STAR_FIELD_SEED,
            graph_scale: GRAPH_SCALE,
            graph_margin: GRAPH_MARGIN,
            marker_radius: MARKER_RADIUS,
            silhouette_path: PathBuf::from(SILHOUETTE_PATH),
            window_title: WINDOW_TITLE.to_string(),
        }
    }
}

impl TransitConfig {
    /// Star diameter (also the side of its bounding box).
    pub fn star_diameter(&self) -> usize {
        2 * self.star_radius as usize
    }

    /// Full window size: star + borders on top, graph strip below.
    pub fn canvas_size(&self) -> (usize, usize) {
        let d = self.star_diameter();
        (
            d + 2 * self.border_x,
            d + 2 * self.border_y + self.graph_height,
        )
    }

    /// Row where the graph strip starts in the composed frame.
    pub fn graph_top(&self) -> usize {
        self.star_diameter() + 2 * self.border_y
    }
}
