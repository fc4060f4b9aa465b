/// x11bare - a minimal X11 client on the raw wire protocol
///
/// Connects to the local X server without Xlib or XCB, opens one window, and
/// streams a software-rendered framebuffer to it while driving a text input
/// box from the server's key events.

pub mod app;
pub mod client;
pub mod config;
pub mod connection;
pub mod error;
pub mod font;
pub mod protocol;
pub mod surface;
pub mod widget;

pub use config::Config;
pub use connection::Connection;
pub use error::{ClientError, ClientResult};
pub use protocol::{Event, GContext, Window};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
