//! Pixel surface
//!
//! An owned `width * height` buffer of 32-bit `0x00RRGGBB` pixels, row-major.
//! All drawing helpers clip to the surface instead of failing.

/// 32-bit pixel; the top byte is ignored by the server at depth 24
pub type Pixel = u32;

pub const BLACK: Pixel = 0x0000_0000;
pub const WHITE: Pixel = 0xFFFF_FFFF;
pub const RED: Pixel = 0x00FF_0000;
pub const GREEN: Pixel = 0x0000_FF00;
pub const BLUE: Pixel = 0x0000_00FF;

/// Bytes per pixel on the wire
pub const PIXEL_SIZE: usize = std::mem::size_of::<Pixel>();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Surface {
    /// Allocate a zeroed (black) surface
    pub fn new(width: usize, height: usize) -> Self {
        Surface {
            width,
            height,
            pixels: vec![BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Size of the pixel data in bytes
    pub fn byte_len(&self) -> usize {
        self.pixels.len() * PIXEL_SIZE
    }

    pub fn clear(&mut self, color: Pixel) {
        self.pixels.fill(color);
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: usize, y: usize, color: Pixel) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Fill the rectangle `[x, x+w) x [y, y+h)`
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Pixel) {
        let x_end = (x + w).min(self.width);
        let y_end = (y + h).min(self.height);
        if x >= x_end {
            return;
        }
        for row in y..y_end {
            let start = row * self.width;
            self.pixels[start + x..start + x_end].fill(color);
        }
    }

    /// One-pixel outline of the rectangle `[x, x+w) x [y, y+h)`
    pub fn draw_box(&mut self, x: usize, y: usize, w: usize, h: usize, color: Pixel) {
        if w == 0 || h == 0 {
            return;
        }
        self.fill_rect(x, y, w, 1, color);
        self.fill_rect(x, y + h - 1, w, 1, color);
        self.fill_rect(x, y, 1, h, color);
        self.fill_rect(x + w - 1, y, 1, h, color);
    }

    /// Copy a `w x h` block of `src` starting at `(src_x, src_y)` to
    /// `(dst_x, dst_y)`, clipped against both surfaces
    #[allow(clippy::too_many_arguments)]
    pub fn blit(
        &mut self,
        src: &Surface,
        src_x: usize,
        src_y: usize,
        w: usize,
        h: usize,
        dst_x: usize,
        dst_y: usize,
    ) {
        let w = w
            .min(src.width.saturating_sub(src_x))
            .min(self.width.saturating_sub(dst_x));
        let h = h
            .min(src.height.saturating_sub(src_y))
            .min(self.height.saturating_sub(dst_y));
        if w == 0 {
            return;
        }

        for row in 0..h {
            let s = (src_y + row) * src.width + src_x;
            let d = (dst_y + row) * self.width + dst_x;
            self.pixels[d..d + w].copy_from_slice(&src.pixels[s..s + w]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_zeroed() {
        let surface = Surface::new(4, 3);
        assert_eq!(surface.pixels().len(), 12);
        assert_eq!(surface.byte_len(), 48);
        assert!(surface.pixels().iter().all(|&p| p == BLACK));
    }

    #[test]
    fn test_clear_and_address() {
        let mut surface = Surface::new(5, 5);
        surface.clear(RED);
        surface.set(2, 3, BLUE);
        assert_eq!(surface.get(2, 3), Some(BLUE));
        assert_eq!(surface.pixels()[3 * 5 + 2], BLUE);
        assert_eq!(surface.get(0, 0), Some(RED));
        assert_eq!(surface.get(5, 0), None);
        surface.set(10, 10, GREEN); // out of bounds is ignored
    }

    #[test]
    fn test_box_outline() {
        let mut surface = Surface::new(6, 6);
        surface.clear(WHITE);
        surface.draw_box(1, 1, 4, 4, BLACK);
        assert_eq!(surface.get(1, 1), Some(BLACK));
        assert_eq!(surface.get(4, 4), Some(BLACK));
        assert_eq!(surface.get(4, 2), Some(BLACK));
        assert_eq!(surface.get(2, 2), Some(WHITE));
        assert_eq!(surface.get(0, 0), Some(WHITE));
        assert_eq!(surface.get(5, 5), Some(WHITE));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut surface = Surface::new(4, 4);
        surface.fill_rect(2, 2, 10, 10, GREEN);
        assert_eq!(surface.get(3, 3), Some(GREEN));
        assert_eq!(surface.get(1, 3), Some(BLACK));
    }

    #[test]
    fn test_blit_region() {
        let mut src = Surface::new(4, 2);
        for x in 0..4 {
            src.set(x, 0, x as Pixel);
            src.set(x, 1, 10 + x as Pixel);
        }

        let mut dst = Surface::new(3, 3);
        dst.clear(WHITE);
        dst.blit(&src, 2, 0, 2, 2, 1, 1);
        assert_eq!(dst.get(1, 1), Some(2));
        assert_eq!(dst.get(2, 1), Some(3));
        assert_eq!(dst.get(1, 2), Some(12));
        assert_eq!(dst.get(0, 1), Some(WHITE));

        // clipped on the right edge of the destination
        dst.blit(&src, 0, 0, 4, 1, 2, 0);
        assert_eq!(dst.get(2, 0), Some(0));
    }
}
