//! The run loop
//!
//! [`AppState`] owns everything that changes from frame to frame: the pixel
//! surface, the input widget and the colour palette. [`run`] owns the
//! connection and the frame's event buffer and drives the state.

use crate::client::{create_window, poll_events, put_image_chunked, PollStatus};
use crate::client::transfer::request_ceiling;
use crate::config::Config;
use crate::connection::Connection;
use crate::error::ClientResult;
use crate::font::{BlockFont, TextRenderer};
use crate::protocol::{Event, ServerError};
use crate::surface::{Pixel, Surface, BLACK, BLUE, GREEN, RED, WHITE};
use crate::widget::InputWidget;
use std::thread;

/// Background colours cycled through by mouse clicks
pub const COLOR_WHEEL: [Pixel; 3] = [RED, GREEN, BLUE];

/// Click-driven colour scheme. Six states: each background twice, once with
/// black text and once with white.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Palette {
    index: usize,
}

impl Palette {
    pub fn background(&self) -> Pixel {
        COLOR_WHEEL[self.index % COLOR_WHEEL.len()]
    }

    pub fn text_color(&self) -> Pixel {
        if self.index % 2 == 0 {
            BLACK
        } else {
            WHITE
        }
    }

    /// Step once per button press; returns whether anything changed
    pub fn advance(&mut self, events: &[Event]) -> bool {
        let clicks = events
            .iter()
            .filter(|e| matches!(e, Event::ButtonPress(_)))
            .count();
        self.index = (self.index + clicks) % (COLOR_WHEEL.len() * 2);
        clicks > 0
    }
}

pub struct AppState<F: TextRenderer = BlockFont> {
    surface: Surface,
    widget: InputWidget,
    palette: Palette,
    font: F,
    frame: u64,
}

impl<F: TextRenderer> AppState<F> {
    pub fn new(config: &Config, font: F) -> Self {
        let palette = Palette::default();
        AppState {
            surface: Surface::new(config.window.width as usize, config.window.height as usize),
            widget: InputWidget::new(&config.widget, palette.text_color()),
            palette,
            font,
            frame: 0,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn widget(&self) -> &InputWidget {
        &self.widget
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Apply one frame's events
    pub fn update(&mut self, events: &[Event]) {
        for event in events {
            if let Event::Other { code: 0, raw } = event {
                log::warn!("{}", ServerError::decode(raw));
            }
        }

        if self.palette.advance(events) {
            log::debug!("Palette changed to {:06x}", self.palette.background());
            self.widget.set_text_color(self.palette.text_color());
        }
        self.widget.advance(events);
        self.frame += 1;
    }

    /// Redraw the whole surface from the current state
    pub fn render(&mut self) {
        self.surface.clear(self.palette.background());
        self.widget.render(&mut self.surface, &self.font);
    }
}

/// Connect, open the window and run frames until the server hangs up
pub fn run(config: &Config) -> ClientResult<()> {
    let mut conn = Connection::connect(config)?;
    log::info!(
        "Connected to display :{} ({})",
        config.display,
        conn.setup().vendor
    );

    let target = create_window(&mut conn, &config.window)?;
    log::info!("Window {} mapped", target.window.id());

    let ceiling = request_ceiling(config.max_request_bytes, conn.max_request_bytes());
    log::debug!("Image requests limited to {} bytes", ceiling);

    let mut state = AppState::new(config, BlockFont);
    let mut events = Vec::new();
    let delay = config.frame_delay();

    loop {
        if poll_events(&mut conn, &mut events)? == PollStatus::HangUp {
            log::info!("Server closed the connection");
            break;
        }

        state.update(&events);
        state.render();
        put_image_chunked(&mut conn, &target, state.surface(), ceiling)?;

        // Events not consumed this frame are dropped
        events.clear();
        thread::sleep(delay);
    }

    log::info!("Ran {} frames", state.frame());
    drop(state);
    conn.shutdown()?;
    log::info!("Done");
    Ok(())
}
