//! Start-of-process configuration
//!
//! Everything here is fixed once the process starts: compile-time defaults,
//! optionally overridden by the environment and the command line.

use std::path::PathBuf;
use std::time::Duration;

/// Directory holding the server's local sockets
pub const X11_SOCKET_DIR: &str = "/tmp/.X11-unix";

/// Fallback authority file when neither XAUTHORITY nor HOME is set
pub const DEFAULT_AUTHORITY_PATH: &str = "/run/user/1000/gdm/Xauthority";

/// Default per-request byte ceiling for image uploads
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 512 * 100 * 4;

/// Window geometry and colours
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub width: u16,
    pub height: u16,
    pub border_width: u16,
    pub background_pixel: u32,
    pub border_pixel: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 512 * 2,
            height: 512,
            border_width: 20,
            background_pixel: 0x00FF_FF00,
            border_pixel: 0x00FF_0000,
        }
    }
}

/// Placement of the text input box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
    pub font_size: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            x: 50,
            y: 50,
            width: 400,
            height: 42,
            font_size: 32,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Display number, selects the socket `/tmp/.X11-unix/X<n>`
    pub display: u16,

    /// Overrides the socket path derived from `display`
    pub socket_path: Option<PathBuf>,

    /// File whose trailing 16 bytes are the MIT-MAGIC-COOKIE-1 token
    pub authority_path: PathBuf,

    pub window: WindowConfig,

    pub widget: WidgetConfig,

    /// Target frame rate; the loop sleeps `1000 / fps` ms after each upload
    pub fps: u32,

    /// Ceiling for one PutImage body, further capped by the server's limit
    pub max_request_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            display: 0,
            socket_path: None,
            authority_path: PathBuf::from(DEFAULT_AUTHORITY_PATH),
            window: WindowConfig::default(),
            widget: WidgetConfig::default(),
            fps: 60,
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
        }
    }
}

impl Config {
    /// Defaults adjusted by `DISPLAY`, `XAUTHORITY` and `HOME`
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Some(display) = std::env::var("DISPLAY").ok().and_then(|d| parse_display(&d)) {
            config.display = display;
        }

        if let Some(path) = std::env::var("XAUTHORITY")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var("HOME")
                    .ok()
                    .map(|h| PathBuf::from(h).join(".Xauthority"))
            })
        {
            config.authority_path = path;
        }

        config
    }

    pub fn socket_path(&self) -> PathBuf {
        self.socket_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}/X{}", X11_SOCKET_DIR, self.display)))
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }
}

/// Parse the display number out of `[host]:display[.screen]`
pub fn parse_display(display: &str) -> Option<u16> {
    let (_, rest) = display.rsplit_once(':')?;
    let number = rest.split('.').next()?;
    number.parse().ok()
}
