//! Per-frame event polling
//!
//! Never blocks: each record is read only after a zero-timeout poll has
//! reported the socket readable.

use crate::connection::{Connection, Readiness};
use crate::error::ClientResult;
use crate::protocol::Event;

/// Upper bound on records drained in one frame
pub const MAX_EVENTS_PER_POLL: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStatus {
    /// Nothing was pending
    Idle,
    /// This many events were appended
    Events(usize),
    /// The server closed the connection; end the session
    HangUp,
}

/// Append every event that is ready now to `events`, in arrival order
pub fn poll_events(conn: &mut Connection, events: &mut Vec<Event>) -> ClientResult<PollStatus> {
    let mut received = 0;

    while received < MAX_EVENTS_PER_POLL {
        match conn.poll_readiness()? {
            Readiness::Idle => break,
            Readiness::HangUp => return Ok(PollStatus::HangUp),
            Readiness::Readable => {
                let record = conn.read_record()?;
                let event = Event::decode(&record);
                log::trace!("Event {:?}", event);
                events.push(event);
                received += 1;
            }
        }
    }

    if received == 0 {
        Ok(PollStatus::Idle)
    } else {
        Ok(PollStatus::Events(received))
    }
}
