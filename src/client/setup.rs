//! Window and graphics context creation

use crate::config::WindowConfig;
use crate::connection::Connection;
use crate::error::{ClientError, ClientResult};
use crate::protocol::*;
use std::io::Write;

/// Depth of the window and of every uploaded image
pub const DEPTH: u8 = 24;

/// The window and its graphics context, both allocated from our id range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientWindow {
    pub window: Window,
    pub gc: GContext,
}

impl ClientWindow {
    /// Ids are fixed offsets from the connection's id base
    pub fn from_id_base(base: u32) -> Self {
        ClientWindow {
            window: Window::new(base),
            gc: GContext::new(base + 1),
        }
    }
}

/// Create and map the window, create its GC, then block until the first
/// Expose arrives. Drawing before that risks the server dropping the frame.
pub fn create_window(conn: &mut Connection, config: &WindowConfig) -> ClientResult<ClientWindow> {
    let ids = ClientWindow::from_id_base(conn.window_id_base());
    let root = conn.screen_id();

    let create = CreateWindowRequest {
        depth: DEPTH,
        wid: ids.window,
        parent: root,
        x: 0,
        y: 0,
        width: config.width,
        height: config.height,
        border_width: config.border_width,
        class: WindowClass::CopyFromParent,
        visual: COPY_FROM_PARENT_VISUAL,
        background_pixel: config.background_pixel,
        border_pixel: config.border_pixel,
        event_mask: event_mask::EXPOSURE | event_mask::BUTTON_PRESS | event_mask::KEY_PRESS,
    };
    conn.write_all(&create.encode())?;
    conn.write_all(&MapWindowRequest { window: ids.window }.encode())?;
    conn.write_all(
        &CreateGCRequest {
            cid: ids.gc,
            drawable: root,
        }
        .encode(),
    )?;
    log::debug!(
        "Requested window {} ({}x{}) with gc {}",
        ids.window.id(),
        config.width,
        config.height,
        ids.gc.id()
    );

    let record = conn.read_record()?;
    match Event::decode(&record) {
        Event::Expose(expose) => {
            log::debug!(
                "Window exposed: {}x{} at ({}, {})",
                expose.width,
                expose.height,
                expose.x,
                expose.y
            );
            Ok(ids)
        }
        other => Err(ClientError::UnexpectedEvent {
            expected: EventType::Expose as u8,
            got: other.code(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_from_base() {
        let ids = ClientWindow::from_id_base(0x0040_0000);
        assert_eq!(ids.window, Window::new(0x0040_0000));
        assert_eq!(ids.gc, GContext::new(0x0040_0001));
    }
}
