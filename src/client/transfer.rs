//! Chunked framebuffer upload
//!
//! A full frame is usually larger than the biggest request the server will
//! take, so it goes out as a series of PutImage requests covering whole rows.
//! Every request body is the same size except possibly the last.

use super::setup::{ClientWindow, DEPTH};
use crate::error::{ClientError, ClientResult};
use crate::protocol::{ImageFormat, PutImageHeader};
use crate::surface::{Surface, PIXEL_SIZE};
use byteorder::{ByteOrder as _, LittleEndian};
use std::io::Write;

/// One request's slice of the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub position_y: usize,
    pub width: usize,
    pub rows: usize,
    pub byte_offset: usize,
    pub byte_len: usize,
}

/// Iterator over the row-aligned chunks of an image
#[derive(Debug, Clone)]
pub struct ChunkPlan {
    width: usize,
    line_bytes: usize,
    total_bytes: usize,
    batch_bytes: usize,
    bytes_sent: usize,
    rows_sent: usize,
}

impl ChunkPlan {
    pub fn new(
        width: usize,
        height: usize,
        pixel_size: usize,
        max_request_bytes: usize,
    ) -> ClientResult<Self> {
        let line_bytes = width * pixel_size;
        let total_bytes = line_bytes * height;

        let mut batch_bytes = 0;
        if total_bytes > 0 {
            if line_bytes > max_request_bytes {
                return Err(ClientError::RowTooWide {
                    line_bytes,
                    max_request_bytes,
                });
            }
            // Grow by whole rows so a batch never ends mid-row
            let ceiling = max_request_bytes.min(total_bytes);
            while batch_bytes + line_bytes <= ceiling {
                batch_bytes += line_bytes;
            }
        }

        Ok(ChunkPlan {
            width,
            line_bytes,
            total_bytes,
            batch_bytes,
            bytes_sent: 0,
            rows_sent: 0,
        })
    }

    /// Body size of every chunk but possibly the last
    pub fn batch_bytes(&self) -> usize {
        self.batch_bytes
    }

    pub fn total_bytes(&self) -> usize {
        self.total_bytes
    }
}

impl Iterator for ChunkPlan {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        if self.bytes_sent >= self.total_bytes {
            return None;
        }

        let byte_len = self.batch_bytes.min(self.total_bytes - self.bytes_sent);
        let chunk = Chunk {
            position_y: self.rows_sent,
            width: self.width,
            rows: byte_len / self.line_bytes,
            byte_offset: self.bytes_sent,
            byte_len,
        };

        self.rows_sent += chunk.rows;
        self.bytes_sent += byte_len;
        Some(chunk)
    }
}

/// Largest PutImage body allowed by both our configured ceiling and the
/// server's advertised maximum request length
pub fn request_ceiling(configured: usize, server_max_request_bytes: usize) -> usize {
    configured
        .min(server_max_request_bytes.saturating_sub(PutImageHeader::SIZE))
        .min(PutImageHeader::MAX_BODY_LEN)
}

/// Upload the whole surface to the window at (0, 0); returns the number of
/// requests sent. A ceiling larger than a PutImage request can describe is
/// clamped to [`PutImageHeader::MAX_BODY_LEN`].
pub fn put_image_chunked<W: Write>(
    out: &mut W,
    target: &ClientWindow,
    surface: &Surface,
    max_request_bytes: usize,
) -> ClientResult<usize> {
    let (width, height) = (surface.width(), surface.height());
    if width > u16::MAX as usize || height > i16::MAX as usize {
        return Err(ClientError::SurfaceTooLarge { width, height });
    }

    let max_request_bytes = max_request_bytes.min(PutImageHeader::MAX_BODY_LEN);
    let plan = ChunkPlan::new(width, height, PIXEL_SIZE, max_request_bytes)?;
    let mut body = vec![0u8; plan.batch_bytes()];
    let pixels = surface.pixels();
    let mut requests = 0;

    for chunk in plan {
        let header = PutImageHeader {
            format: ImageFormat::ZPixmap,
            drawable: target.window,
            gc: target.gc,
            width: chunk.width as u16,
            height: chunk.rows as u16,
            dst_x: 0,
            dst_y: chunk.position_y as i16,
            left_pad: 0,
            depth: DEPTH,
            body_len: chunk.byte_len,
        };

        let first = chunk.byte_offset / PIXEL_SIZE;
        let count = chunk.byte_len / PIXEL_SIZE;
        LittleEndian::write_u32_into(&pixels[first..first + count], &mut body[..chunk.byte_len]);

        out.write_all(&header.encode())?;
        out.write_all(&body[..chunk.byte_len])?;
        requests += 1;
    }

    log::trace!("Uploaded {}x{} frame in {} requests", width, height, requests);
    Ok(requests)
}
