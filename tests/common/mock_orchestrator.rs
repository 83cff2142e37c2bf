/*!
 * Mock orchestration backends for testing
 *
 * `MockSubmitter` implements the Submitter trait in memory. `spawn_orchestrator`
 * starts a one-shot local HTTP server so the real HTTP client can be exercised
 * without reaching any external service.
 */

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use anyhow::Result;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use launchgate::errors::SubmissionError;
use launchgate::submission::{SubmissionReceipt, SubmissionRequest, Submitter};

/// In-memory submitter that records every request
#[derive(Debug, Default)]
pub struct MockSubmitter {
    /// Requests received so far
    pub requests: Arc<Mutex<Vec<SubmissionRequest>>>,
    /// Should every call fail
    pub should_fail: bool,
}

impl MockSubmitter {
    /// Create a submitter that accepts every request
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a submitter that rejects every request with a connection error
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Number of requests received
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Submitter for MockSubmitter {
    async fn submit(&self, request: SubmissionRequest) -> Result<SubmissionReceipt, SubmissionError> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(request);

        if self.should_fail {
            return Err(SubmissionError::RequestFailed("connection refused".to_string()));
        }

        Ok(SubmissionReceipt {
            id: format!("job_{}", 1000 + requests.len()),
            message: None,
        })
    }
}

/// Start a server answering one request with `status_line` and `body`.
///
/// Returns the upload URL and a handle resolving to the raw request received.
pub async fn spawn_orchestrator(status_line: &'static str, body: &'static str) -> Result<(String, JoinHandle<String>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept failed");
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.expect("write failed");
        let _ = socket.shutdown().await;

        request
    });

    Ok((format!("http://{}/upload", addr), handle))
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let read = socket.read(&mut chunk).await.expect("read failed");
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);

        if request_complete(&buffer) {
            break;
        }
    }

    String::from_utf8_lossy(&buffer).to_string()
}

fn request_complete(buffer: &[u8]) -> bool {
    let Some(header_end) = buffer.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };

    let headers = String::from_utf8_lossy(&buffer[..header_end]).to_lowercase();
    let body = &buffer[header_end + 4..];

    if headers.contains("transfer-encoding: chunked") {
        return body.ends_with(b"0\r\n\r\n");
    }

    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    body.len() >= content_length
}
