//! X11 protocol events
//!
//! Every event arrives as a fixed 32-byte record tagged by its first byte.
//! Only the three kinds this client selects are decoded field by field; the
//! rest are kept verbatim so their order within a frame survives.

use super::types::*;
use byteorder::{ByteOrder as _, LittleEndian};

/// Size of every event record on the wire
pub const EVENT_SIZE: usize = 32;

/// Event type codes we decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EventType {
    KeyPress = 2,
    ButtonPress = 4,
    Expose = 12,
}

impl EventType {
    pub fn from_u8(code: u8) -> Option<Self> {
        // Bit 7 flags events generated by SendEvent
        match code & 0x7f {
            2 => Some(EventType::KeyPress),
            4 => Some(EventType::ButtonPress),
            12 => Some(EventType::Expose),
            _ => None,
        }
    }
}

/// Decoded event record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    KeyPress(KeyPressEvent),
    ButtonPress(ButtonPressEvent),
    Expose(ExposeEvent),
    /// Anything else, including error packets (code 0)
    Other { code: u8, raw: [u8; EVENT_SIZE] },
}

impl Event {
    /// Decode a 32-byte record
    pub fn decode(record: &[u8; EVENT_SIZE]) -> Self {
        match EventType::from_u8(record[0]) {
            Some(EventType::KeyPress) => Event::KeyPress(KeyPressEvent::decode(record)),
            Some(EventType::ButtonPress) => Event::ButtonPress(ButtonPressEvent::decode(record)),
            Some(EventType::Expose) => Event::Expose(ExposeEvent::decode(record)),
            None => Event::Other {
                code: record[0],
                raw: *record,
            },
        }
    }

    /// Raw type code of the record
    pub fn code(&self) -> u8 {
        match self {
            Event::KeyPress(_) => EventType::KeyPress as u8,
            Event::ButtonPress(_) => EventType::ButtonPress as u8,
            Event::Expose(_) => EventType::Expose as u8,
            Event::Other { code, .. } => *code,
        }
    }

    /// Encode event to wire format (32 bytes)
    pub fn encode(&self, buffer: &mut [u8; EVENT_SIZE]) {
        buffer.fill(0);

        match self {
            Event::KeyPress(e) => e.encode(buffer),
            Event::ButtonPress(e) => e.encode(buffer),
            Event::Expose(e) => e.encode(buffer),
            Event::Other { raw, .. } => buffer.copy_from_slice(raw),
        }
    }
}

// Key and button events share a common structure
macro_rules! define_key_button_event {
    ($name:ident, $code:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            pub detail: u8,  // Keycode or button
            pub sequence: u16,
            pub time: Timestamp,
            pub root: Window,
            pub event: Window,
            pub child: Window,
            pub root_x: i16,
            pub root_y: i16,
            pub event_x: i16,
            pub event_y: i16,
            pub state: u16,  // Modifier mask
            pub same_screen: bool,
        }

        impl $name {
            pub fn decode(buffer: &[u8; EVENT_SIZE]) -> Self {
                $name {
                    detail: buffer[1],
                    sequence: LittleEndian::read_u16(&buffer[2..4]),
                    time: Timestamp::new(LittleEndian::read_u32(&buffer[4..8])),
                    root: Window::new(LittleEndian::read_u32(&buffer[8..12])),
                    event: Window::new(LittleEndian::read_u32(&buffer[12..16])),
                    child: Window::new(LittleEndian::read_u32(&buffer[16..20])),
                    root_x: LittleEndian::read_i16(&buffer[20..22]),
                    root_y: LittleEndian::read_i16(&buffer[22..24]),
                    event_x: LittleEndian::read_i16(&buffer[24..26]),
                    event_y: LittleEndian::read_i16(&buffer[26..28]),
                    state: LittleEndian::read_u16(&buffer[28..30]),
                    same_screen: buffer[30] != 0,
                }
            }

            pub fn encode(&self, buffer: &mut [u8; EVENT_SIZE]) {
                buffer[0] = $code;
                buffer[1] = self.detail;
                LittleEndian::write_u16(&mut buffer[2..4], self.sequence);
                LittleEndian::write_u32(&mut buffer[4..8], self.time.get());
                LittleEndian::write_u32(&mut buffer[8..12], self.root.id().get());
                LittleEndian::write_u32(&mut buffer[12..16], self.event.id().get());
                LittleEndian::write_u32(&mut buffer[16..20], self.child.id().get());
                LittleEndian::write_i16(&mut buffer[20..22], self.root_x);
                LittleEndian::write_i16(&mut buffer[22..24], self.root_y);
                LittleEndian::write_i16(&mut buffer[24..26], self.event_x);
                LittleEndian::write_i16(&mut buffer[26..28], self.event_y);
                LittleEndian::write_u16(&mut buffer[28..30], self.state);
                buffer[30] = if self.same_screen { 1 } else { 0 };
            }
        }
    };
}

define_key_button_event!(KeyPressEvent, 2);
define_key_button_event!(ButtonPressEvent, 4);

impl KeyPressEvent {
    pub fn keycode(&self) -> Keycode {
        Keycode::new(self.detail)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposeEvent {
    pub sequence: u16,
    pub window: Window,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub count: u16,
}

impl ExposeEvent {
    pub fn decode(buffer: &[u8; EVENT_SIZE]) -> Self {
        ExposeEvent {
            sequence: LittleEndian::read_u16(&buffer[2..4]),
            window: Window::new(LittleEndian::read_u32(&buffer[4..8])),
            x: LittleEndian::read_u16(&buffer[8..10]),
            y: LittleEndian::read_u16(&buffer[10..12]),
            width: LittleEndian::read_u16(&buffer[12..14]),
            height: LittleEndian::read_u16(&buffer[14..16]),
            count: LittleEndian::read_u16(&buffer[16..18]),
        }
    }

    pub fn encode(&self, buffer: &mut [u8; EVENT_SIZE]) {
        buffer[0] = EventType::Expose as u8;
        LittleEndian::write_u16(&mut buffer[2..4], self.sequence);
        LittleEndian::write_u32(&mut buffer[4..8], self.window.id().get());
        LittleEndian::write_u16(&mut buffer[8..10], self.x);
        LittleEndian::write_u16(&mut buffer[10..12], self.y);
        LittleEndian::write_u16(&mut buffer[12..14], self.width);
        LittleEndian::write_u16(&mut buffer[14..16], self.height);
        LittleEndian::write_u16(&mut buffer[16..18], self.count);
    }
}
