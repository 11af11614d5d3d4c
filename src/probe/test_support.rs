use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub(super) enum FixtureBehavior {
    /// Answer every request with the given status, after an optional delay.
    Respond { status: u16, delay: Duration },
    /// Accept and read, then hold the connection open past any client
    /// timeout before closing.
    Stall,
}

pub(super) struct FixtureServer {
    url: String,
    connections: Arc<AtomicU64>,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl FixtureServer {
    pub(super) fn spawn(behavior: FixtureBehavior) -> Result<Self, String> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .map_err(|err| format!("bind fixture server failed: {}", err))?;
        let addr = listener
            .local_addr()
            .map_err(|err| format!("fixture server addr failed: {}", err))?;
        listener
            .set_nonblocking(true)
            .map_err(|err| format!("set_nonblocking failed: {}", err))?;

        let connections = Arc::new(AtomicU64::new(0));
        let accepted = Arc::clone(&connections);
        let (shutdown_tx, shutdown_rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                match listener.accept() {
                    Ok((stream, _)) => {
                        accepted.fetch_add(1, Ordering::SeqCst);
                        thread::spawn(move || handle_client(stream, behavior));
                    }
                    Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(Duration::from_millis(10));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            url: format!("http://{}", addr),
            connections,
            shutdown: shutdown_tx,
            thread: Some(handle),
        })
    }

    pub(super) fn url(&self) -> &str {
        &self.url
    }

    pub(super) fn connection_count(&self) -> u64 {
        self.connections.load(Ordering::SeqCst)
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

fn handle_client(mut stream: TcpStream, behavior: FixtureBehavior) {
    let mut buffer = [0u8; 1024];
    if stream.read(&mut buffer).is_err() {
        return;
    }
    match behavior {
        FixtureBehavior::Respond { status, delay } => {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            let response = format!(
                "HTTP/1.1 {} Probe\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK",
                status
            );
            if stream.write_all(response.as_bytes()).is_err() {
                return;
            }
            if stream.flush().is_err() {
                return;
            }
        }
        FixtureBehavior::Stall => {
            thread::sleep(Duration::from_secs(2));
        }
    }
    drop(stream.shutdown(Shutdown::Both));
}
