//! Scripted mock X server for integration tests

#![allow(dead_code)]

use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::time::Duration;
use x11bare::protocol::*;

pub const ID_BASE: u32 = 0x0040_0000;
pub const ROOT: u32 = 0x0000_0539;
pub const VENDOR: &str = "Mock X Server";

/// Full success reply: 8-byte header followed by the body
pub fn success_reply(vendor: &str, formats: u8, root: u32, max_request_units: u16) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&12_345u32.to_le_bytes()); // release
    body.extend_from_slice(&ID_BASE.to_le_bytes());
    body.extend_from_slice(&0x001f_ffffu32.to_le_bytes());
    body.extend_from_slice(&0u32.to_le_bytes()); // motion buffer
    body.extend_from_slice(&(vendor.len() as u16).to_le_bytes());
    body.extend_from_slice(&max_request_units.to_le_bytes());
    body.push(1); // screens
    body.push(formats);
    body.extend_from_slice(&[0, 0, 32, 32, 8, 255]);
    body.extend_from_slice(&[0u8; 4]);
    body.extend_from_slice(vendor.as_bytes());
    body.extend_from_slice(&vec![0u8; pad(vendor.len())]);
    for _ in 0..formats {
        body.extend_from_slice(&[24, 32, 32, 0, 0, 0, 0, 0]);
    }
    // screen: root, colormap, white, black, input masks, sizes, ...
    body.extend_from_slice(&root.to_le_bytes());
    body.extend_from_slice(&[0u8; 36]);

    let mut reply = vec![1, 0];
    reply.extend_from_slice(&11u16.to_le_bytes());
    reply.extend_from_slice(&0u16.to_le_bytes());
    reply.extend_from_slice(&((body.len() / 4) as u16).to_le_bytes());
    reply.extend_from_slice(&body);
    reply
}

/// Failed reply carrying `reason`
pub fn failed_reply(reason: &str) -> Vec<u8> {
    let mut reply = vec![0, reason.len() as u8];
    reply.extend_from_slice(&11u16.to_le_bytes());
    reply.extend_from_slice(&0u16.to_le_bytes());
    reply.extend_from_slice(&((padded_len(reason.len()) / 4) as u16).to_le_bytes());
    reply.extend_from_slice(reason.as_bytes());
    reply.extend_from_slice(&vec![0u8; pad(reason.len())]);
    reply
}

pub fn read_n(stream: &mut UnixStream, n: usize) -> Vec<u8> {
    let mut buf = vec![0u8; n];
    stream.read_exact(&mut buf).expect("mock server short read");
    buf
}

/// Read the 48-byte setup request and return its cookie
pub fn expect_setup_request(stream: &mut UnixStream) -> Vec<u8> {
    let request = read_n(stream, SetupRequest::SIZE);
    assert_eq!(request[0], b'l');
    assert_eq!(u16::from_le_bytes([request[2], request[3]]), 11);
    assert_eq!(u16::from_le_bytes([request[6], request[7]]), 18);
    assert_eq!(u16::from_le_bytes([request[8], request[9]]), 16);
    assert_eq!(&request[12..30], MIT_MAGIC_COOKIE_NAME.as_bytes());
    request[32..48].to_vec()
}

/// True when the client has sent nothing further within `wait`
pub fn nothing_pending(stream: &mut UnixStream, wait: Duration) -> bool {
    stream.set_read_timeout(Some(wait)).unwrap();
    let mut byte = [0u8; 1];
    let idle = match stream.read(&mut byte) {
        Ok(0) => true,
        Ok(_) => false,
        Err(e) => matches!(
            e.kind(),
            std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
        ),
    };
    stream.set_read_timeout(None).unwrap();
    idle
}

/// Read CreateWindow, MapWindow and CreateGC, checking their opcodes
pub fn expect_window_requests(stream: &mut UnixStream) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let create = read_n(stream, CreateWindowRequest::SIZE);
    assert_eq!(create[0], RequestOpcode::CreateWindow as u8);
    let map = read_n(stream, MapWindowRequest::SIZE);
    assert_eq!(map[0], RequestOpcode::MapWindow as u8);
    let gc = read_n(stream, CreateGCRequest::SIZE);
    assert_eq!(gc[0], RequestOpcode::CreateGC as u8);
    (create, map, gc)
}

pub fn send_event(stream: &mut UnixStream, event: &Event) {
    let mut record = [0u8; EVENT_SIZE];
    event.encode(&mut record);
    stream.write_all(&record).unwrap();
}

pub fn expose(window: u32) -> Event {
    Event::Expose(ExposeEvent {
        sequence: 1,
        window: Window::new(window),
        x: 0,
        y: 0,
        width: 1024,
        height: 512,
        count: 0,
    })
}

pub fn key_press(code: u8, state: u16) -> Event {
    Event::KeyPress(KeyPressEvent {
        detail: code,
        sequence: 2,
        time: Timestamp::new(1000),
        root: Window::new(ROOT),
        event: Window::new(ID_BASE),
        child: Window::NONE,
        root_x: 100,
        root_y: 100,
        event_x: 10,
        event_y: 10,
        state,
        same_screen: true,
    })
}

pub fn button_press(button: u8) -> Event {
    Event::ButtonPress(ButtonPressEvent {
        detail: button,
        sequence: 3,
        time: Timestamp::new(1001),
        root: Window::new(ROOT),
        event: Window::new(ID_BASE),
        child: Window::NONE,
        root_x: 100,
        root_y: 100,
        event_x: 10,
        event_y: 10,
        state: 0,
        same_screen: true,
    })
}
