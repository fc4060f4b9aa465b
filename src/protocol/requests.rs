//! X11 protocol requests
//!
//! The four core requests this client sends, each encoded into a fixed-size
//! byte array. Lengths in request headers count 4-byte units and include the
//! header itself.

use super::types::*;
use byteorder::{ByteOrder as _, LittleEndian};

/// X11 request opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RequestOpcode {
    CreateWindow = 1,
    MapWindow = 8,
    CreateGC = 55,
    PutImage = 72,
}

/// Create window request with a background pixel, border pixel and event
/// mask as its value list
#[derive(Debug, Clone)]
pub struct CreateWindowRequest {
    pub depth: u8,
    pub wid: Window,
    pub parent: Window,
    pub x: i16,
    pub y: i16,
    pub width: u16,
    pub height: u16,
    pub border_width: u16,
    pub class: WindowClass,
    pub visual: u32,
    pub background_pixel: u32,
    pub border_pixel: u32,
    pub event_mask: u32,
}

impl CreateWindowRequest {
    pub const HEADER_SIZE: usize = 32;
    pub const SIZE: usize = Self::HEADER_SIZE + 3 * 4;

    pub fn encode(&self) -> [u8; Self::SIZE] {
        let mut buffer = [0u8; Self::SIZE];
        buffer[0] = RequestOpcode::CreateWindow as u8;
        buffer[1] = self.depth;
        LittleEndian::write_u16(&mut buffer[2..4], (Self::SIZE / 4) as u16);
        LittleEndian::write_u32(&mut buffer[4..8], self.wid.id().get());
        LittleEndian::write_u32(&mut buffer[8..12], self.parent.id().get());
        LittleEndian::write_i16(&mut buffer[12..14], self.x);
        LittleEndian::write_i16(&mut buffer[14..16], self.y);
        LittleEndian::write_u16(&mut buffer[16..18], self.width);
        LittleEndian::write_u16(&mut buffer[18..20], self.height);
        LittleEndian::write_u16(&mut buffer[20..22], self.border_width);
        LittleEndian::write_u16(&mut buffer[22..24], self.class as u16);
        LittleEndian::write_u32(&mut buffer[24..28], self.visual);
        LittleEndian::write_u32(
            &mut buffer[28..32],
            window_attr::BACK_PIXEL | window_attr::BORDER_PIXEL | window_attr::EVENT_MASK,
        );
        // Values follow in ascending bit order of the value mask
        LittleEndian::write_u32(&mut buffer[32..36], self.background_pixel);
        LittleEndian::write_u32(&mut buffer[36..40], self.border_pixel);
        LittleEndian::write_u32(&mut buffer[40..44], self.event_mask);
        buffer
    }
}

#[derive(Debug, Clone)]
pub struct MapWindowRequest {
    pub window: Window,
}

impl MapWindowRequest {
    pub const SIZE: usize = 8;

    pub fn encode(&self) -> [u8; Self::SIZE] {
        let mut buffer = [0u8; Self::SIZE];
        buffer[0] = RequestOpcode::MapWindow as u8;
        LittleEndian::write_u16(&mut buffer[2..4], (Self::SIZE / 4) as u16);
        LittleEndian::write_u32(&mut buffer[4..8], self.window.id().get());
        buffer
    }
}

/// Create GC request with an empty value list (all defaults)
#[derive(Debug, Clone)]
pub struct CreateGCRequest {
    pub cid: GContext,
    pub drawable: Window,
}

impl CreateGCRequest {
    pub const SIZE: usize = 16;

    pub fn encode(&self) -> [u8; Self::SIZE] {
        let mut buffer = [0u8; Self::SIZE];
        buffer[0] = RequestOpcode::CreateGC as u8;
        LittleEndian::write_u16(&mut buffer[2..4], (Self::SIZE / 4) as u16);
        LittleEndian::write_u32(&mut buffer[4..8], self.cid.id().get());
        LittleEndian::write_u32(&mut buffer[8..12], self.drawable.id().get());
        LittleEndian::write_u32(&mut buffer[12..16], 0); // value mask
        buffer
    }
}

/// Put image request header; `body_len` bytes of pixel data follow it
#[derive(Debug, Clone)]
pub struct PutImageHeader {
    pub format: ImageFormat,
    pub drawable: Window,
    pub gc: GContext,
    pub width: u16,
    pub height: u16,
    pub dst_x: i16,
    pub dst_y: i16,
    pub left_pad: u8,
    pub depth: u8,
    pub body_len: usize,
}

impl PutImageHeader {
    pub const SIZE: usize = 24;

    /// Largest body whose request length still fits the 16-bit length field
    pub const MAX_BODY_LEN: usize = u16::MAX as usize * 4 - Self::SIZE;

    /// Request length in 4-byte units, header included
    pub fn length_units(&self) -> usize {
        (Self::SIZE + super::padded_len(self.body_len)) / 4
    }

    pub fn encode(&self) -> [u8; Self::SIZE] {
        let mut buffer = [0u8; Self::SIZE];
        buffer[0] = RequestOpcode::PutImage as u8;
        buffer[1] = self.format as u8;
        LittleEndian::write_u16(&mut buffer[2..4], self.length_units() as u16);
        LittleEndian::write_u32(&mut buffer[4..8], self.drawable.id().get());
        LittleEndian::write_u32(&mut buffer[8..12], self.gc.id().get());
        LittleEndian::write_u16(&mut buffer[12..14], self.width);
        LittleEndian::write_u16(&mut buffer[14..16], self.height);
        LittleEndian::write_i16(&mut buffer[16..18], self.dst_x);
        LittleEndian::write_i16(&mut buffer[18..20], self.dst_y);
        buffer[20] = self.left_pad;
        buffer[21] = self.depth;
        buffer
    }
}
