//! Wire-level value types
//!
//! Thin newtypes over the integers the protocol carries, so a window id
//! cannot be passed where a GC id is expected.

use std::fmt;

/// Server resource id. Only the low 29 bits are ever set.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XID(pub u32);

impl XID {
    pub const NONE: XID = XID(0);

    pub fn new(id: u32) -> Self {
        XID(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for XID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub XID);

        impl $name {
            pub const NONE: $name = $name(XID::NONE);

            pub fn new(id: u32) -> Self {
                $name(XID(id))
            }

            pub fn id(&self) -> XID {
                self.0
            }
        }
    };
}

resource_id!(
    /// Window id; also used for the root window the server reports
    Window
);
resource_id!(
    /// Graphics context id
    GContext
);

/// Server time in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub u32);

impl Timestamp {
    pub fn new(ms: u32) -> Self {
        Timestamp(ms)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

/// Physical key number as reported in key events (8..=255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keycode(pub u8);

impl Keycode {
    pub fn new(code: u8) -> Self {
        Keycode(code)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowClass {
    CopyFromParent = 0,
}

/// Only ZPixmap is ever sent: one 32-bit pixel per point at depth 24
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    ZPixmap = 2,
}

/// First byte of the setup request: all multi-byte fields little-endian
pub const LSB_FIRST: u8 = b'l';

/// Visual id 0: inherit the parent's visual
pub const COPY_FROM_PARENT_VISUAL: u32 = 0;

/// Bits of the window event-mask attribute
pub mod event_mask {
    pub const KEY_PRESS: u32 = 0x0000_0001;
    pub const BUTTON_PRESS: u32 = 0x0000_0004;
    pub const EXPOSURE: u32 = 0x0000_8000;
}

/// CreateWindow value-mask bits, in the order their values are written
pub mod window_attr {
    pub const BACK_PIXEL: u32 = 0x0000_0002;
    pub const BORDER_PIXEL: u32 = 0x0000_0008;
    pub const EVENT_MASK: u32 = 0x0000_0800;
}

/// Modifier state carried in key and button events
pub mod modifier_mask {
    pub const SHIFT: u16 = 0x0001;
    pub const LOCK: u16 = 0x0002;
    pub const CONTROL: u16 = 0x0004;
    pub const MOD2: u16 = 0x0010;
}
