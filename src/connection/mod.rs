//! Connection layer
//!
//! Owns the Unix socket to the X server. Establishing a `Connection` performs
//! the whole setup handshake, so holding one means the server accepted us.

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::protocol::*;
use nix::poll::{poll, PollFd, PollFlags, PollTimeout};
use std::io::{self, Read, Write};
use std::net::Shutdown;
use std::os::fd::AsFd;
use std::os::unix::net::UnixStream;
use std::path::Path;

/// Result of a zero-timeout readiness check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// Nothing to read right now
    Idle,
    /// At least one record can be read without blocking
    Readable,
    /// The server closed the connection
    HangUp,
}

/// An established connection to the X server
pub struct Connection {
    stream: UnixStream,
    setup: SetupInfo,
}

impl Connection {
    /// Connect to the display socket named by `config` and authenticate
    pub fn connect(config: &Config) -> ClientResult<Self> {
        let cookie = read_authority_cookie(&config.authority_path)?;

        let socket_path = config.socket_path();
        let stream = UnixStream::connect(&socket_path)?;
        log::debug!("Connected to {}", socket_path.display());

        Self::handshake(stream, cookie)
    }

    /// Run the setup exchange over an already connected stream
    pub fn handshake(mut stream: UnixStream, cookie: [u8; MIT_COOKIE_SIZE]) -> ClientResult<Self> {
        stream.write_all(&SetupRequest::new(cookie).encode())?;
        log::debug!("Sent setup request ({})", MIT_MAGIC_COOKIE_NAME);

        let mut header = [0u8; SetupReplyHeader::SIZE];
        stream.read_exact(&mut header)?;
        let header = SetupReplyHeader::decode(&header);

        let mut body = vec![0u8; header.body_len()];
        stream.read_exact(&mut body)?;
        header.check(&body)?;

        let setup = SetupInfo::decode(&body)?;
        log::debug!("Setup successful:");
        log::debug!(
            "  Protocol: {}.{}",
            header.protocol_major_version,
            header.protocol_minor_version
        );
        log::debug!("  Vendor: {} (release {})", setup.vendor, setup.release_number);
        log::debug!("  Resource ID base: 0x{:08x}", setup.resource_id_base);
        log::debug!("  Resource ID mask: 0x{:08x}", setup.resource_id_mask);
        log::debug!("  Max request length: {} bytes", setup.max_request_bytes());
        log::debug!("  Root window: {}", setup.root.id());

        Ok(Connection { stream, setup })
    }

    pub fn setup(&self) -> &SetupInfo {
        &self.setup
    }

    /// First free id in the range the server assigned us
    pub fn window_id_base(&self) -> u32 {
        self.setup.resource_id_base
    }

    /// Root window of the default screen
    pub fn screen_id(&self) -> Window {
        self.setup.root
    }

    pub fn max_request_bytes(&self) -> usize {
        self.setup.max_request_bytes()
    }

    /// Blocking read of exactly one 32-byte record
    pub fn read_record(&mut self) -> ClientResult<[u8; EVENT_SIZE]> {
        let mut record = [0u8; EVENT_SIZE];
        self.stream.read_exact(&mut record)?;
        Ok(record)
    }

    /// Check for pending input without waiting
    pub fn poll_readiness(&self) -> ClientResult<Readiness> {
        let mut fds = [PollFd::new(self.stream.as_fd(), PollFlags::POLLIN)];
        if poll(&mut fds, PollTimeout::ZERO)? == 0 {
            return Ok(Readiness::Idle);
        }

        let revents = fds[0].revents().unwrap_or(PollFlags::empty());
        if revents.contains(PollFlags::POLLHUP) {
            Ok(Readiness::HangUp)
        } else if revents.contains(PollFlags::POLLIN) {
            Ok(Readiness::Readable)
        } else if revents.intersects(PollFlags::POLLERR | PollFlags::POLLNVAL) {
            Err(ClientError::Io(io::Error::new(
                io::ErrorKind::Other,
                "socket reported an error condition",
            )))
        } else {
            Ok(Readiness::Idle)
        }
    }

    /// Close both directions of the socket
    pub fn shutdown(self) -> ClientResult<()> {
        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            // The server may already be gone
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Write for Connection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}

/// The cookie is the trailing 16 bytes of the authority file.
///
/// This matches a file holding a single local MIT-MAGIC-COOKIE-1 entry, which
/// is what display managers write for the session.
pub fn read_authority_cookie(path: &Path) -> ClientResult<[u8; MIT_COOKIE_SIZE]> {
    let data = std::fs::read(path).map_err(|source| ClientError::Authority {
        path: path.to_path_buf(),
        source,
    })?;

    if data.len() < MIT_COOKIE_SIZE {
        return Err(ClientError::AuthorityTooShort {
            path: path.to_path_buf(),
            len: data.len(),
        });
    }

    let mut cookie = [0u8; MIT_COOKIE_SIZE];
    cookie.copy_from_slice(&data[data.len() - MIT_COOKIE_SIZE..]);
    log::debug!("Read auth from: {:?}", path);
    Ok(cookie)
}
