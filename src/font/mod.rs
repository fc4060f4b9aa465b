//! Glyph rendering seam
//!
//! The widget only depends on [`TextRenderer`]. A real rasterizer plugs in
//! behind it; [`BlockFont`] is the stand-in the binary ships with, drawing
//! each visible character as a solid cell.

use crate::surface::{Pixel, Surface};

/// Nominal glyph cell width in font units
pub const GLYPH_WIDTH: usize = 8;

/// Nominal glyph cell height in font units
pub const GLYPH_HEIGHT: usize = 16;

pub trait TextRenderer {
    /// Draw `text` with its top-left corner at `(x, y)`; `size` is the line
    /// height in pixels and each character advances `size / 2` pixels
    fn render_text(&self, text: &[u8], color: Pixel, target: &mut Surface, x: usize, y: usize, size: usize);
}

/// Solid-cell glyphs: a filled block per non-space character
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockFont;

impl TextRenderer for BlockFont {
    fn render_text(&self, text: &[u8], color: Pixel, target: &mut Surface, x: usize, y: usize, size: usize) {
        let advance = size / 2;
        let inset = (size / GLYPH_HEIGHT).max(1);

        for (i, &ch) in text.iter().enumerate() {
            if ch == b' ' {
                continue;
            }
            let cell_x = x + i * advance;
            target.fill_rect(
                cell_x + inset,
                y + inset,
                advance.saturating_sub(2 * inset),
                size.saturating_sub(2 * inset),
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{BLACK, WHITE};

    #[test]
    fn test_block_font_cells() {
        let mut surface = Surface::new(64, 32);
        surface.clear(WHITE);
        BlockFont.render_text(b"a b", BLACK, &mut surface, 0, 0, 32);

        // 'a' occupies [0, 16), the space [16, 32), 'b' [32, 48)
        assert_eq!(surface.get(8, 16), Some(BLACK));
        assert_eq!(surface.get(24, 16), Some(WHITE));
        assert_eq!(surface.get(40, 16), Some(BLACK));
        assert_eq!(surface.get(0, 0), Some(WHITE)); // inset
        assert_eq!(surface.get(56, 16), Some(WHITE));
    }
}
