use std::io::Read;
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// One-shot TCP server that reads a request and never answers it.
pub struct RawServer {
    url: String,
    release: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl RawServer {
    /// Reads the request, then closes the socket.
    pub fn closing() -> Self {
        Self::spawn(false)
    }

    /// Reads the request, then keeps the socket open until dropped.
    pub fn stalled() -> Self {
        Self::spawn(true)
    }

    pub fn url(&self) -> String {
        self.url.clone()
    }

    fn spawn(hold: bool) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let (release, released) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                read_request(&mut stream);
                if hold {
                    let _ = released.recv_timeout(Duration::from_secs(10));
                }
            }
        });

        Self {
            url,
            release: Some(release),
            handle: Some(handle),
        }
    }
}

impl Drop for RawServer {
    fn drop(&mut self) {
        self.release.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Read headers and a `Content-Length` body.
fn read_request(stream: &mut TcpStream) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut data = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => data.extend_from_slice(&chunk[..n]),
        }

        if let Some(end) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&data[..end]).to_ascii_lowercase();
            let body_len = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if data.len() >= end + 4 + body_len {
                return;
            }
        }
    }
}
