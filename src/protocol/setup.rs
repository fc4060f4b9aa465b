//! X11 connection setup protocol
//!
//! This module handles the initial connection handshake from the client side:
//! encoding the setup request and decoding the server's reply.

use super::*;
use crate::error::{ClientError, ClientResult};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Seek, SeekFrom};

/// The only authorization scheme we speak
pub const MIT_MAGIC_COOKIE_NAME: &str = "MIT-MAGIC-COOKIE-1";

/// Length of a MIT-MAGIC-COOKIE-1 token
pub const MIT_COOKIE_SIZE: usize = 16;

/// Fixed part of the success body preceding the vendor string
pub const SETUP_PREFIX_SIZE: usize = 32;

/// Size of one pixmap format entry
pub const FORMAT_SIZE: usize = 8;

/// Connection setup request from client
#[derive(Debug, Clone)]
pub struct SetupRequest {
    pub byte_order: u8,
    pub protocol_major_version: u16,
    pub protocol_minor_version: u16,
    pub cookie: [u8; MIT_COOKIE_SIZE],
}

impl SetupRequest {
    /// 12-byte header + padded name (20) + cookie (16)
    pub const SIZE: usize = 12 + 20 + MIT_COOKIE_SIZE;

    pub fn new(cookie: [u8; MIT_COOKIE_SIZE]) -> Self {
        SetupRequest {
            byte_order: LSB_FIRST,
            protocol_major_version: PROTOCOL_MAJOR_VERSION,
            protocol_minor_version: PROTOCOL_MINOR_VERSION,
            cookie,
        }
    }

    pub fn encode(&self) -> [u8; Self::SIZE] {
        use byteorder::ByteOrder as _;

        let mut buffer = [0u8; Self::SIZE];
        buffer[0] = self.byte_order;
        LittleEndian::write_u16(&mut buffer[2..4], self.protocol_major_version);
        LittleEndian::write_u16(&mut buffer[4..6], self.protocol_minor_version);
        LittleEndian::write_u16(&mut buffer[6..8], MIT_MAGIC_COOKIE_NAME.len() as u16);
        LittleEndian::write_u16(&mut buffer[8..10], MIT_COOKIE_SIZE as u16);

        let name = MIT_MAGIC_COOKIE_NAME.as_bytes();
        buffer[12..12 + name.len()].copy_from_slice(name);
        buffer[32..32 + MIT_COOKIE_SIZE].copy_from_slice(&self.cookie);
        buffer
    }
}

/// Setup response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStatus {
    Failed = 0,
    Success = 1,
    Authenticate = 2,
}

impl SetupStatus {
    pub fn from_u8(status: u8) -> Option<Self> {
        match status {
            0 => Some(SetupStatus::Failed),
            1 => Some(SetupStatus::Success),
            2 => Some(SetupStatus::Authenticate),
            _ => None,
        }
    }
}

/// The 8-byte header every setup reply starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupReplyHeader {
    pub status: u8,
    /// Reason length for a failed reply, unused otherwise
    pub detail: u8,
    pub protocol_major_version: u16,
    pub protocol_minor_version: u16,
    /// Length of the rest of the reply in 4-byte units
    pub additional_length: u16,
}

impl SetupReplyHeader {
    pub const SIZE: usize = 8;

    pub fn decode(header: &[u8; Self::SIZE]) -> Self {
        use byteorder::ByteOrder as _;

        SetupReplyHeader {
            status: header[0],
            detail: header[1],
            protocol_major_version: LittleEndian::read_u16(&header[2..4]),
            protocol_minor_version: LittleEndian::read_u16(&header[4..6]),
            additional_length: LittleEndian::read_u16(&header[6..8]),
        }
    }

    /// Body size in bytes
    pub fn body_len(&self) -> usize {
        self.additional_length as usize * 4
    }

    /// Map a non-success status to the matching error, reading the failure
    /// reason out of `body` when there is one
    pub fn check(&self, body: &[u8]) -> ClientResult<()> {
        match SetupStatus::from_u8(self.status) {
            Some(SetupStatus::Success) => Ok(()),
            Some(SetupStatus::Failed) => {
                let len = (self.detail as usize).min(body.len());
                Err(ClientError::HandshakeFailed {
                    reason: String::from_utf8_lossy(&body[..len]).trim_end().to_string(),
                })
            }
            Some(SetupStatus::Authenticate) => Err(ClientError::AuthenticateUnsupported),
            None => Err(ClientError::UnexpectedStatus(self.status)),
        }
    }
}

/// The parts of a successful setup reply the client keeps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupInfo {
    pub release_number: u32,
    pub resource_id_base: u32,
    pub resource_id_mask: u32,
    /// Maximum request length in 4-byte units
    pub maximum_request_length: u16,
    pub screen_count: u8,
    pub format_count: u8,
    pub vendor: String,
    /// Root window of the first screen
    pub root: Window,
}

impl SetupInfo {
    /// Decode the success body: fixed prefix, then skip the vendor string and
    /// the pixmap format table to reach the first screen's root window.
    pub fn decode(body: &[u8]) -> ClientResult<Self> {
        let short = |_| ClientError::MalformedSetup("reply body shorter than its fixed prefix");

        let mut cursor = Cursor::new(body);
        let release_number = cursor.read_u32::<LittleEndian>().map_err(short)?;
        let resource_id_base = cursor.read_u32::<LittleEndian>().map_err(short)?;
        let resource_id_mask = cursor.read_u32::<LittleEndian>().map_err(short)?;
        let _motion_buffer_size = cursor.read_u32::<LittleEndian>().map_err(short)?;
        let vendor_len = cursor.read_u16::<LittleEndian>().map_err(short)? as usize;
        let maximum_request_length = cursor.read_u16::<LittleEndian>().map_err(short)?;
        let screen_count = cursor.read_u8().map_err(short)?;
        let format_count = cursor.read_u8().map_err(short)?;
        // byte orders, scanline unit/pad, keycode range, 4 bytes padding
        if body.len() < SETUP_PREFIX_SIZE {
            return Err(ClientError::MalformedSetup(
                "reply body shorter than its fixed prefix",
            ));
        }

        let vendor_end = SETUP_PREFIX_SIZE + vendor_len;
        let vendor = body
            .get(SETUP_PREFIX_SIZE..vendor_end)
            .map(|v| String::from_utf8_lossy(v).to_string())
            .ok_or(ClientError::MalformedSetup("vendor string runs past the body"))?;

        if screen_count == 0 {
            return Err(ClientError::MalformedSetup("server reports no screens"));
        }

        let root_offset =
            SETUP_PREFIX_SIZE + padded_len(vendor_len) + format_count as usize * FORMAT_SIZE;
        cursor
            .seek(SeekFrom::Start(root_offset as u64))
            .map_err(|_| ClientError::MalformedSetup("bad screen offset"))?;
        let root = cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| ClientError::MalformedSetup("screen list runs past the body"))?;

        Ok(SetupInfo {
            release_number,
            resource_id_base,
            resource_id_mask,
            maximum_request_length,
            screen_count,
            format_count,
            vendor,
            root: Window::new(root),
        })
    }

    /// Largest request the server accepts, in bytes
    pub fn max_request_bytes(&self) -> usize {
        self.maximum_request_length as usize * 4
    }
}
