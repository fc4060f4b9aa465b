//! Wire protocol
//!
//! The subset of the X11 wire protocol a single-window
//! client needs: the connection setup, four requests, and event records.
//! Everything is encoded little-endian (we always announce `'l'` at setup).

pub mod types;
pub mod errors;
pub mod events;
pub mod keymap;
pub mod requests;
pub mod setup;

pub use types::*;
pub use errors::*;
pub use events::*;
pub use requests::*;
pub use setup::*;

/// Version announced in the setup request
pub const PROTOCOL_MAJOR_VERSION: u16 = 11;
pub const PROTOCOL_MINOR_VERSION: u16 = 0;

/// Bytes needed to bring `n` up to a 4-byte boundary
pub fn pad(n: usize) -> usize {
    (4 - (n % 4)) % 4
}

/// `n` rounded up to a multiple of 4
pub fn padded_len(n: usize) -> usize {
    n + pad(n)
}
