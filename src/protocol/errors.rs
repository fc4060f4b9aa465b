//! X11 protocol error packets
//!
//! The server reports a failed request asynchronously as a 32-byte record
//! whose first byte is 0. We never issue requests that expect a reply, so
//! these records arrive interleaved with events and are only logged.

use byteorder::{ByteOrder as _, LittleEndian};
use std::fmt;

/// Core error names, indexed by error code minus one
const CORE_ERROR_NAMES: [&str; 17] = [
    "BadRequest",
    "BadValue",
    "BadWindow",
    "BadPixmap",
    "BadAtom",
    "BadCursor",
    "BadFont",
    "BadMatch",
    "BadDrawable",
    "BadAccess",
    "BadAlloc",
    "BadColor",
    "BadGC",
    "BadIDChoice",
    "BadName",
    "BadLength",
    "BadImplementation",
];

/// Name of a core error code; extension errors have none
pub fn error_name(code: u8) -> Option<&'static str> {
    CORE_ERROR_NAMES.get((code as usize).checked_sub(1)?).copied()
}

/// Error packet received from the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    /// Raw error code; extensions allocate codes above the core range
    pub code: u8,
    pub sequence: u16,
    pub bad_value: u32,
    pub minor_opcode: u16,
    pub major_opcode: u8,
}

impl ServerError {
    /// Decode an error record (byte 0 must already be known to be 0)
    pub fn decode(record: &[u8; 32]) -> Self {
        ServerError {
            code: record[1],
            sequence: LittleEndian::read_u16(&record[2..4]),
            bad_value: LittleEndian::read_u32(&record[4..8]),
            minor_opcode: LittleEndian::read_u16(&record[8..10]),
            major_opcode: record[10],
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match error_name(self.code) {
            Some(name) => write!(f, "{}", name)?,
            None => write!(f, "error code {}", self.code)?,
        }
        write!(
            f,
            " for request {}.{} (seq {}, value 0x{:08x})",
            self.major_opcode, self.minor_opcode, self.sequence, self.bad_value
        )
    }
}
