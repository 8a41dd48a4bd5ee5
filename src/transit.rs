// Per-frame work: slide the planet over the star, measure the light that
// gets through, and add one dot to the brightness plot.
// Visual expectation: a dark disc crawls left-to-right across the star while
// the curve under it dips and recovers.

use crate::config::TransitConfig;
use crate::draw::{blit, fill_circle};
use crate::star::{StarModel, build_background};
use crate::types::{FrameBuffer, Silhouette, cool_gray, rgb};
use rand::Rng;

const MARKER_CURRENT: u32 = 0x00_FF_00_00; // red: where the curve is right now
const MARKER_HISTORY: u32 = 0x00_80_80_80; // gray: what stays behind in the plot

/// Everything that changes (or is reused) from one frame to the next.
pub struct TransitState {
    cfg: TransitConfig,
    star: StarModel,
    silhouette: Silhouette,
    background: FrameBuffer, // painted once, never touched again
    frame: FrameBuffer,      // what gets presented
    graph: FrameBuffer,      // brightness plot, accumulates until the wrap
    baseline: f64,
    tick: usize,
}

impl TransitState {
    /// Paint the background and measure the unobscured star once.
    pub fn new<R: Rng>(cfg: TransitConfig, silhouette: Silhouette, rng: &mut R) -> Self {
        let star = StarModel::new(cfg.star_radius, cfg.limb_darkening);
        let bg = build_background(&cfg, &star, rng);
        tracing::info!(
            width = bg.canvas.width,
            height = bg.canvas.height,
            baseline = bg.baseline,
            "background built"
        );
        let frame = FrameBuffer::new(bg.canvas.width, bg.canvas.height);
        let graph = FrameBuffer::new(bg.canvas.width, cfg.graph_height);
        Self {
            cfg,
            star,
            silhouette,
            background: bg.canvas,
            frame,
            graph,
            baseline: bg.baseline,
            tick: 0,
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    #[cfg(test)]
    pub fn graph(&self) -> &FrameBuffer {
        &self.graph
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn tick(&self) -> usize {
        self.tick
    }

    /// Ticks in one full pass: the planet enters from the left and leaves on the right.
    pub fn period(&self) -> usize {
        self.silhouette.width + self.frame.width
    }

    /// Compose one frame and plot its brightness. Returns the frame luminosity.
    pub fn render_frame(&mut self) -> f64 {
        let lum = self.composite();
        self.plot(lum);
        lum
    }

    /// Background + planet for the current tick; sums the star light still visible.
    fn composite(&mut self) -> f64 {
        self.frame.pixels.copy_from_slice(&self.background.pixels);

        let band = self.cfg.star_diameter();
        let shift = self.silhouette.width as i64 - self.tick as i64;
        let border_x = self.cfg.border_x as i32;
        let mut total = 0.0f64;

        for x in 0..self.frame.width {
            let col = x as i64 + shift;
            for y in 0..band {
                if self.silhouette.covers(col, y) {
                    // Cheap positional dither so the planet isn't a flat black blob.
                    let gray = ((col * 59 + y as i64 * 239) % 16) as u8;
                    self.frame.set(x, y + self.cfg.border_y, cool_gray(gray));
                } else {
                    total += self.star.luminosity(x as i32 - border_x, y as i32) as f64;
                }
            }
        }
        total
    }

    /// Drop this tick's point on the plot and show the plot under the star.
    fn plot(&mut self, frame_luminosity: f64) {
        let width = self.frame.width as f32;
        let time_scale = self.period() as f32 / width;
        let gx = (self.tick as f32 / time_scale) as i32;
        let gy = graph_y(&self.cfg, frame_luminosity / self.baseline) as i32;
        let r = self.cfg.marker_radius;

        fill_circle(&mut self.graph, gx, gy, r, MARKER_CURRENT);
        blit(&mut self.frame, &self.graph, 0, self.cfg.graph_top());
        // Shows up from the next frame on, so the curve's history reads gray.
        fill_circle(&mut self.graph, gx, gy, r, MARKER_HISTORY);
    }

    /// Step the clock. Returns true when the animation wrapped (plot cleared).
    pub fn advance(&mut self) -> bool {
        self.tick += 1;
        if self.tick > self.period() {
            self.tick = 0;
            self.graph.fill(rgb(0, 0, 0));
            tracing::debug!("transit finished, restarting");
            return true;
        }
        false
    }
}

/// Plot row for a brightness ratio (1.0 = nothing covered). Lower light, lower dot.
pub fn graph_y(cfg: &TransitConfig, ratio: f64) -> f32 {
    let span = cfg.graph_scale * cfg.graph_height as f32;
    span - ratio as f32 * (span - cfg.graph_margin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::channels;
    use approx::assert_relative_eq;
    use image::{Rgb, RgbImage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// A solid block `w` wide that covers the whole star band.
    fn block(w: u32) -> Silhouette {
        Silhouette::from_rgb(&RgbImage::from_pixel(w, 440, Rgb([255, 255, 255])))
    }

    fn state(sil: Silhouette) -> TransitState {
        TransitState::new(TransitConfig::default(), sil, &mut StdRng::seed_from_u64(3))
    }

    #[test]
    fn nothing_covered_at_tick_zero() {
        let mut st = state(block(100));
        let lum = st.render_frame();
        assert_eq!(lum, st.baseline());

        let cfg = TransitConfig::default();
        assert_relative_eq!(graph_y(&cfg, 1.0), cfg.graph_margin);

        // Current point is red in the shown frame, gray in the kept plot.
        let top = cfg.graph_top();
        assert_eq!(st.frame().get(0, top + 10), MARKER_CURRENT);
        assert_eq!(st.graph().get(0, 10), MARKER_HISTORY);
    }

    #[test]
    fn planet_over_the_star_dims_it() {
        let mut st = state(block(100));
        st.tick = 520; // covers frame columns 420..520, the middle of the star
        let lum = st.render_frame();
        assert!(lum < st.baseline());
        assert!(lum > 0.0);

        // Dithered planet pixel: col = 470 - 520 + 100 = 50, row 220.
        let gray = ((50 * 59 + 220 * 239) % 16) as u8;
        let px = st.frame().get(470, 220 + 17);
        assert_eq!(channels(px), (gray, gray, gray / 2));
    }

    #[test]
    fn planet_beside_the_star_blocks_nothing() {
        let mut st = state(block(100));
        st.tick = 100; // columns 0..100, all left of the disc
        assert_eq!(st.render_frame(), st.baseline());

        st.tick = st.period(); // fully past the right edge
        assert_eq!(st.render_frame(), st.baseline());
    }

    #[test]
    fn deeper_coverage_means_less_light() {
        let mut narrow = state(block(40));
        narrow.tick = 490; // columns 450..490
        let mut wide = state(block(120));
        wide.tick = 570; // columns 450..570
        assert!(wide.render_frame() < narrow.render_frame());
    }

    #[test]
    fn short_silhouette_leaves_lower_rows_visible() {
        let short = Silhouette::from_rgb(&RgbImage::from_pixel(100, 10, Rgb([255, 0, 0])));
        let mut st = state(short);
        st.tick = 520;
        let before = st.background.get(470, 300);
        st.render_frame();
        assert_eq!(st.frame().get(470, 300), before);
    }

    #[test]
    fn graph_row_falls_as_light_drops() {
        let cfg = TransitConfig::default();
        let mut prev = graph_y(&cfg, 0.0);
        for i in 1..=100 {
            let y = graph_y(&cfg, i as f64 / 100.0);
            assert!(y < prev);
            prev = y;
        }
    }

    #[test]
    fn clock_wraps_to_zero_and_clears_the_plot() {
        let mut st = state(block(100));
        st.render_frame();
        assert!(!st.graph().is_blank());

        st.tick = st.period() - 1;
        assert!(!st.advance());
        assert_eq!(st.tick(), st.period());
        assert!(st.advance());
        assert_eq!(st.tick(), 0);
        assert!(st.graph().is_blank());

        assert!(!st.advance());
        assert_eq!(st.tick(), 1);
    }
}
