//! Minimal HTTP/1.1 server serving canned JSON bodies for integration tests.
//!
//! Routes map a full request path (including any query string) to a response
//! body; unknown paths get a 404 so failure paths can be exercised too.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

pub struct PageServer {
    base: String,
    routes: Arc<Mutex<HashMap<String, String>>>,
}

impl PageServer {
    /// Starts a server in a background thread. It runs until the process
    /// exits; register routes before issuing requests.
    pub fn start() -> PageServer {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes: Arc<Mutex<HashMap<String, String>>> = Arc::default();
        let handler_routes = Arc::clone(&routes);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&handler_routes);
                thread::spawn(move || handle(stream, &routes));
            }
        });
        PageServer {
            base: format!("http://127.0.0.1:{}", port),
            routes,
        }
    }

    /// Base URL without a trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Absolute URL for a path, for embedding as a `next` link.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn route(&self, path: &str, body: impl Into<String>) {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_owned(), body.into());
    }
}

fn handle(mut stream: TcpStream, routes: &Mutex<HashMap<String, String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");
    let response = match routes.lock().unwrap().get(path) {
        Some(body) => format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        ),
        None => {
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_owned()
        }
    };
    let _ = stream.write_all(response.as_bytes());
}
