//! Event polling and frame upload over a live socket pair

mod common;

use common::*;
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::thread;
use x11bare::app::AppState;
use x11bare::client::transfer::request_ceiling;
use x11bare::client::{poll_events, put_image_chunked, ClientWindow, PollStatus, DEPTH};
use x11bare::config::Config;
use x11bare::font::BlockFont;
use x11bare::protocol::*;
use x11bare::surface::{Surface, BLACK, RED};
use x11bare::Connection;

/// Handshake over a fresh pair; returns the client connection and the
/// server end of the socket
fn connected() -> (Connection, UnixStream) {
    let (client, mut server) = UnixStream::pair().unwrap();
    let server = thread::spawn(move || {
        expect_setup_request(&mut server);
        server
            .write_all(&success_reply(VENDOR, 7, ROOT, 0xffff))
            .unwrap();
        server
    });
    let conn = Connection::handshake(client, [7u8; 16]).unwrap();
    (conn, server.join().unwrap())
}

/// What the mock server saw of one PutImage request
struct Received {
    width: u16,
    height: u16,
    dst_y: i16,
    depth: u8,
    body: Vec<u8>,
}

/// Read PutImage requests until `rows` rows have arrived
fn read_frame(server: &mut UnixStream, rows: usize) -> Vec<Received> {
    let mut received = Vec::new();
    let mut seen = 0;
    while seen < rows {
        let header = read_n(server, PutImageHeader::SIZE);
        assert_eq!(header[0], RequestOpcode::PutImage as u8);
        assert_eq!(header[1], ImageFormat::ZPixmap as u8);
        assert_eq!(&header[4..8], &ID_BASE.to_le_bytes());
        assert_eq!(&header[8..12], &(ID_BASE + 1).to_le_bytes());

        let units = u16::from_le_bytes([header[2], header[3]]) as usize;
        let body = read_n(server, units * 4 - PutImageHeader::SIZE);
        let request = Received {
            width: u16::from_le_bytes([header[12], header[13]]),
            height: u16::from_le_bytes([header[14], header[15]]),
            dst_y: i16::from_le_bytes([header[18], header[19]]),
            depth: header[21],
            body,
        };
        seen += request.height as usize;
        received.push(request);
    }
    received
}

#[test]
fn drains_pending_events_in_order() {
    let (mut conn, mut server) = connected();

    send_event(&mut server, &key_press(38, 0));
    let mut noise = [0u8; EVENT_SIZE];
    noise[0] = 33; // ClientMessage
    server.write_all(&noise).unwrap();
    send_event(&mut server, &button_press(1));

    let mut events = Vec::new();
    assert_eq!(
        poll_events(&mut conn, &mut events).unwrap(),
        PollStatus::Events(3)
    );
    assert!(matches!(events[0], Event::KeyPress(ref k) if k.detail == 38));
    assert!(matches!(events[1], Event::Other { code: 33, .. }));
    assert!(matches!(events[2], Event::ButtonPress(ref b) if b.detail == 1));

    // Nothing left: the next poll returns immediately
    events.clear();
    assert_eq!(poll_events(&mut conn, &mut events).unwrap(), PollStatus::Idle);
    assert!(events.is_empty());
}

#[test]
fn server_close_is_reported_as_hang_up() {
    let (mut conn, server) = connected();
    drop(server);

    let mut events = Vec::new();
    assert_eq!(
        poll_events(&mut conn, &mut events).unwrap(),
        PollStatus::HangUp
    );
}

#[test]
fn chunked_upload_arrives_row_complete() {
    let (mut conn, mut server) = connected();
    let target = ClientWindow::from_id_base(conn.window_id_base());

    let mut surface = Surface::new(64, 40);
    surface.clear(RED);
    surface.set(0, 39, BLACK);

    let reader = thread::spawn(move || read_frame(&mut server, 40));
    let sent = put_image_chunked(&mut conn, &target, &surface, 1024).unwrap();
    let received = reader.join().unwrap();

    // 256 bytes per row, four rows per request
    assert_eq!(sent, 10);
    assert_eq!(received.len(), 10);
    for (i, request) in received.iter().enumerate() {
        assert_eq!(request.width, 64);
        assert_eq!(request.height, 4);
        assert_eq!(request.dst_y, (i * 4) as i16);
        assert_eq!(request.depth, DEPTH);
        assert_eq!(request.body.len(), 1024);
    }
    assert_eq!(&received[0].body[..4], &RED.to_le_bytes());
    let last = &received[9].body;
    assert_eq!(&last[3 * 256..3 * 256 + 4], &BLACK.to_le_bytes());
}

#[test]
fn full_frame_with_typing_and_click() {
    let (mut conn, mut server) = connected();
    let config = Config::default();
    let target = ClientWindow::from_id_base(conn.window_id_base());
    let ceiling = request_ceiling(config.max_request_bytes, conn.max_request_bytes());
    assert_eq!(ceiling, config.max_request_bytes);

    send_event(&mut server, &key_press(38, 0));
    send_event(&mut server, &key_press(39, modifier_mask::SHIFT));
    send_event(&mut server, &button_press(1));

    let mut state = AppState::new(&config, BlockFont);
    let mut events = Vec::new();
    assert_eq!(
        poll_events(&mut conn, &mut events).unwrap(),
        PollStatus::Events(3)
    );
    state.update(&events);
    state.render();

    assert_eq!(state.widget().text(), b"aS");
    assert_eq!(state.palette().background(), x11bare::surface::GREEN);
    assert_eq!(state.surface().get(0, 0), Some(x11bare::surface::GREEN));

    let height = config.window.height as usize;
    let reader = thread::spawn(move || read_frame(&mut server, height));
    let sent = put_image_chunked(&mut conn, &target, state.surface(), ceiling).unwrap();
    let received = reader.join().unwrap();

    assert_eq!(sent, 11);
    assert_eq!(received.iter().map(|r| r.height as usize).sum::<usize>(), 512);
    assert_eq!(received[10].height, 12);
    assert_eq!(received[10].dst_y, 500);
}
