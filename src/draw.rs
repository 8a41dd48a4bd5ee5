// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the composed transit frame.
// 2) Small round markers for the brightness plot.
// 3) Copying the plot strip into the frame underneath the star.

use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Window, WindowOptions};

/// Anything that can show frames and tell us when the user is done.
/// The render loop only talks to this, so it can run without a real window.
pub trait Surface {
    /// Poll the surface once; false means it was closed.
    fn poll_open(&mut self) -> bool;
    /// Show one finished frame.
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error>;
}

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the background canvas.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }
}

impl Surface for Drawer {
    /// Returns false when the user closes the window (so we can stop the loop).
    fn poll_open(&mut self) -> bool {
        self.window.is_open()
    }

    /// Push the pixels for this frame to the screen.
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&frame.pixels, frame.width, frame.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }
}

/* ---------- Software drawing ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    fb.set(x, y, color);
}

/// Filled disc of `radius` around (cx,cy); radius 1 gives a small plus.
/// Visual: one dot of the brightness curve.
pub fn fill_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, color: u32) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                put_pixel(fb, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Copy `src` into `dst` with its top-left corner at (x0, y0), clipped to `dst`.
/// Visual: the plot strip replaces whatever was under it.
pub fn blit(dst: &mut FrameBuffer, src: &FrameBuffer, x0: usize, y0: usize) {
    if x0 >= dst.width || y0 >= dst.height {
        return;
    }
    let w = src.width.min(dst.width - x0);
    let h = src.height.min(dst.height - y0);
    for row in 0..h {
        let s = row * src.width;
        let d = (y0 + row) * dst.width + x0;
        dst.pixels[d..d + w].copy_from_slice(&src.pixels[s..s + w]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_pixel_clips_silently() {
        let mut fb = FrameBuffer::new(2, 2);
        put_pixel(&mut fb, -1, 0, 7);
        put_pixel(&mut fb, 0, 2, 7);
        assert!(fb.is_blank());
        put_pixel(&mut fb, 1, 1, 7);
        assert_eq!(fb.get(1, 1), 7);
    }

    #[test]
    fn radius_one_marker_is_a_plus() {
        let mut fb = FrameBuffer::new(5, 5);
        fill_circle(&mut fb, 2, 2, 1, 9);
        let lit: Vec<_> = (0..5)
            .flat_map(|y| (0..5).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get(x, y) == 9)
            .collect();
        assert_eq!(lit, vec![(2, 1), (1, 2), (2, 2), (3, 2), (2, 3)]);
    }

    #[test]
    fn marker_at_the_edge_is_clipped() {
        let mut fb = FrameBuffer::new(3, 3);
        fill_circle(&mut fb, 0, 0, 1, 9);
        assert_eq!(fb.pixels.iter().filter(|&&p| p == 9).count(), 3);
    }

    #[test]
    fn blit_places_and_clips() {
        let mut dst = FrameBuffer::new(4, 4);
        let mut src = FrameBuffer::new(3, 2);
        src.fill(5);
        blit(&mut dst, &src, 2, 3);
        assert_eq!(dst.get(2, 3), 5);
        assert_eq!(dst.get(3, 3), 5);
        assert_eq!(dst.get(1, 3), 0);
        assert_eq!(dst.pixels.iter().filter(|&&p| p == 5).count(), 2);
    }
}
