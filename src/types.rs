// Core types shared by the star, silhouette and compositor code.

/// Pack three 8-bit channels as 0x00RRGGBB (the layout minifb wants).
#[inline]
pub fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Split 0x00RRGGBB back into (r, g, b).
#[cfg(test)]
#[inline]
pub fn channels(px: u32) -> (u8, u8, u8) {
    (((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8)
}

/// Gray with the blue channel halved: the cool tint used for star-field
/// speckle, the star disc and the planet dither alike.
#[inline]
pub fn cool_gray(v: u8) -> u32 {
    rgb(v, v, v / 2)
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// All-black buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: u32) {
        self.pixels[y * self.width + x] = color;
    }

    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// True when every pixel is black (used to check a freshly reset graph).
    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&p| p == 0)
    }
}

/// Opacity mask of the transiting body, decoded once from the bitmap.
/// Visual: every `true` is a pixel of planet that hides the star behind it.
#[derive(Clone, Debug)]
pub struct Silhouette {
    pub width: usize,
    pub height: usize,
    pub opaque: Vec<bool>, // row-major, length = width * height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_and_unpack_channels() {
        let px = rgb(0x12, 0x34, 0x56);
        assert_eq!(px, 0x0012_3456);
        assert_eq!(channels(px), (0x12, 0x34, 0x56));
        assert_eq!(channels(cool_gray(200)), (200, 200, 100));
    }

    #[test]
    fn new_buffer_is_blank_until_written() {
        let mut fb = FrameBuffer::new(4, 3);
        assert!(fb.is_blank());
        fb.set(3, 2, rgb(1, 0, 0));
        assert!(!fb.is_blank());
        assert_eq!(fb.get(3, 2), 0x0001_0000);
        fb.fill(0);
        assert!(fb.is_blank());
    }
}
