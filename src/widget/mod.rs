//! Text input box
//!
//! A single-line input that edits at the end of its text only. Each frame the
//! run loop calls [`InputWidget::advance`] with that frame's events and then
//! [`InputWidget::render`], which never mutates the widget.
//!
//! When the text is wider than the box interior, it is rendered off-screen
//! and only its trailing columns are copied in, so the caret end stays
//! visible.

use crate::config::WidgetConfig;
use crate::font::{TextRenderer, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::protocol::keymap::{self, BACKSPACE};
use crate::protocol::{Event, Keycode};
use crate::surface::{Pixel, Surface, BLACK, WHITE};

/// Gap between the box edge and the text, in pixels
pub const PADDING: usize = 5;

/// Caret bar width in pixels
pub const CARET_WIDTH: usize = 2;

/// Frames per caret blink cycle; the caret shows for the first half
pub const BLINK_PERIOD: u64 = 60;

/// Source and destination of the overflow copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlitWindow {
    /// First column of the off-screen text rendering that is shown
    pub src_x: usize,
    /// Number of columns copied
    pub width: usize,
    pub dst_x: usize,
    pub dst_y: usize,
}

#[derive(Debug, Clone)]
pub struct InputWidget {
    is_focused: bool,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    text: Vec<u8>,
    text_color: Pixel,
    font_size: usize,
    blink_timer: u64,
}

impl InputWidget {
    pub fn new(config: &WidgetConfig, text_color: Pixel) -> Self {
        InputWidget {
            is_focused: true,
            x: config.x,
            y: config.y,
            width: config.width,
            height: config.height,
            text: Vec::new(),
            text_color,
            font_size: config.font_size,
            blink_timer: 0,
        }
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    pub fn blink_timer(&self) -> u64 {
        self.blink_timer
    }

    pub fn set_text_color(&mut self, color: Pixel) {
        self.text_color = color;
    }

    /// Consume this frame's key presses in arrival order, then tick the
    /// blink timer once. Events other than key presses are left alone.
    pub fn advance(&mut self, events: &[Event]) {
        if self.is_focused {
            for event in events {
                if let Event::KeyPress(key) = event {
                    self.handle_key(key.keycode(), key.state);
                }
            }
        }
        self.blink_timer = self.blink_timer.wrapping_add(1);
    }

    fn handle_key(&mut self, keycode: Keycode, state: u16) {
        if keycode == BACKSPACE {
            if self.text.pop().is_some() {
                self.blink_timer = 0;
            }
        } else if let Some(ch) = keymap::key_to_char(keycode, state) {
            self.text.push(ch);
            // Keep the caret solid while typing
            self.blink_timer = 0;
        }
    }

    /// Width of the rendered text alone
    pub fn text_width(&self) -> usize {
        self.text.len() * GLYPH_WIDTH * self.font_size / GLYPH_WIDTH / 2
    }

    fn caret_extent(&self) -> usize {
        if self.is_focused {
            CARET_WIDTH
        } else {
            0
        }
    }

    /// Width of the text plus room for the caret when focused
    pub fn full_width(&self) -> usize {
        self.text_width() + self.caret_extent()
    }

    pub fn interior_width(&self) -> usize {
        self.width.saturating_sub(PADDING * 2)
    }

    fn text_height(&self) -> usize {
        GLYPH_HEIGHT * self.font_size / GLYPH_HEIGHT
    }

    /// `None` while the text fits; otherwise the trailing window of the
    /// off-screen rendering that gets copied into the box
    pub fn overflow_window(&self) -> Option<BlitWindow> {
        let full = self.full_width();
        let interior = self.interior_width();
        if full <= interior {
            return None;
        }
        Some(BlitWindow {
            src_x: full - interior,
            width: interior,
            dst_x: self.x + PADDING,
            dst_y: self.y + PADDING,
        })
    }

    pub fn caret_visible(&self) -> bool {
        self.is_focused && self.blink_timer % BLINK_PERIOD < BLINK_PERIOD / 2
    }

    /// Left edge of the caret; clamps to the right of the interior once the
    /// text overflows
    pub fn caret_x(&self) -> usize {
        let limit = self.interior_width().saturating_sub(CARET_WIDTH);
        self.x + PADDING + self.text_width().min(limit)
    }

    pub fn render(&self, target: &mut Surface, font: &dyn TextRenderer) {
        target.draw_box(self.x, self.y, self.width, self.height, BLACK);
        self.render_text(target, font);
        self.render_caret(target);
    }

    fn render_text(&self, target: &mut Surface, font: &dyn TextRenderer) {
        match self.overflow_window() {
            None => font.render_text(
                &self.text,
                self.text_color,
                target,
                self.x + PADDING,
                self.y + PADDING,
                self.font_size,
            ),
            Some(window) => {
                let text_height = self.text_height();
                let mut buffer = Surface::new(self.full_width(), text_height);
                buffer.clear(WHITE);
                font.render_text(&self.text, self.text_color, &mut buffer, 0, 0, self.font_size);
                target.blit(
                    &buffer,
                    window.src_x,
                    0,
                    window.width,
                    text_height,
                    window.dst_x,
                    window.dst_y,
                );
            }
        }
    }

    fn render_caret(&self, target: &mut Surface) {
        if self.caret_visible() {
            target.fill_rect(
                self.caret_x(),
                self.y + PADDING,
                CARET_WIDTH,
                self.font_size,
                BLACK,
            );
        }
    }
}
