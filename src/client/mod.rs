//! Client operations on an established connection
//!
//! Window and GC creation, the chunked framebuffer upload, and the per-frame
//! event poll. Each function writes straight to the socket; nothing is
//! buffered between calls.

pub mod events;
pub mod setup;
pub mod transfer;

pub use events::{poll_events, PollStatus};
pub use setup::{create_window, ClientWindow, DEPTH};
pub use transfer::{put_image_chunked, Chunk, ChunkPlan};
