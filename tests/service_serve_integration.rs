// Integration tests for the HTTP loop over real sockets
use status_board::service;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::{Duration, Instant};

fn free_addr() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    addr.to_string()
}

fn connect(addr: &str) -> TcpStream {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        match TcpStream::connect(addr) {
            Ok(s) => return s,
            Err(e) if Instant::now() < deadline => {
                let _ = e;
                thread::sleep(Duration::from_millis(20));
            }
            Err(e) => panic!("server never came up on {addr}: {e}"),
        }
    }
}

fn request(addr: &str, method: &str, path: &str) -> String {
    let mut stream = connect(addr);
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    write!(stream, "{method} {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n").unwrap();
    let mut out = String::new();
    stream.read_to_string(&mut out).unwrap();
    out
}

#[test]
fn test_serve_answers_health_as_plain_text() {
    let addr = free_addr();
    let bind = addr.clone();
    thread::spawn(move || service::serve(&bind));

    let resp = request(&addr, "GET", "/health");
    assert!(resp.starts_with("HTTP/1.1 200"), "{resp}");
    assert!(resp.contains("Content-Type: text/plain; charset=utf-8"), "{resp}");
    assert!(resp.ends_with("\r\n\r\nUP"), "{resp}");

    let missing = request(&addr, "GET", "/nope");
    assert!(missing.starts_with("HTTP/1.1 404"), "{missing}");
    assert!(missing.ends_with(service::NOT_FOUND));

    let wrong_method = request(&addr, "POST", "/info");
    assert!(wrong_method.starts_with("HTTP/1.1 405"), "{wrong_method}");
}

#[test]
fn test_serve_fails_when_port_held() {
    let held = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = held.local_addr().unwrap().to_string();
    let err = service::serve(&addr).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to bind"));
}
