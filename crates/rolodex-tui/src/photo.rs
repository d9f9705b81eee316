use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use rolodex_core::domain::{encode_data_uri, mime_for_path};
use rolodex_core::UploadTicket;
use tracing::debug;

/// Outcome of a background photo read.
#[derive(Debug)]
pub struct PhotoRead {
    pub ticket: UploadTicket,
    pub path: PathBuf,
    pub result: io::Result<String>,
}

/// Reads photo files off the UI thread. Results come back through
/// [`PhotoLoader::poll`], which the event loop drains every tick.
#[derive(Debug)]
pub struct PhotoLoader {
    tx: Sender<PhotoRead>,
    rx: Receiver<PhotoRead>,
}

impl Default for PhotoLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoLoader {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn spawn(&self, ticket: UploadTicket, path: PathBuf) {
        let tx = self.tx.clone();
        debug!(path = %path.display(), "photo read started");
        thread::spawn(move || {
            let result = read_as_data_uri(&path);
            // The receiver only goes away on shutdown.
            let _ = tx.send(PhotoRead {
                ticket,
                path,
                result,
            });
        });
    }

    pub fn poll(&self) -> Option<PhotoRead> {
        match self.rx.try_recv() {
            Ok(read) => Some(read),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

fn read_as_data_uri(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(encode_data_uri(&bytes, mime_for_path(path)))
}

#[cfg(test)]
mod tests {
    use super::PhotoLoader;
    use rolodex_core::domain::ContactId;
    use rolodex_core::UploadTicket;
    use std::fs;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    fn wait_for(loader: &PhotoLoader) -> super::PhotoRead {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(read) = loader.poll() {
                return read;
            }
            assert!(Instant::now() < deadline, "photo read timed out");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn reads_file_as_data_uri() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("me.png");
        fs::write(&path, b"hi").expect("write photo");

        let loader = PhotoLoader::new();
        let ticket = UploadTicket {
            contact_id: ContactId::new(),
            session: 3,
        };
        loader.spawn(ticket, path.clone());

        let read = wait_for(&loader);
        assert_eq!(read.ticket, ticket);
        assert_eq!(read.path, path);
        assert_eq!(read.result.expect("read ok"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn missing_file_reports_error() {
        let temp = TempDir::new().expect("tempdir");
        let loader = PhotoLoader::new();
        let ticket = UploadTicket {
            contact_id: ContactId::new(),
            session: 1,
        };
        loader.spawn(ticket, temp.path().join("missing.jpg"));

        let read = wait_for(&loader);
        assert!(read.result.is_err());
    }

    #[test]
    fn poll_without_reads_is_none() {
        let loader = PhotoLoader::new();
        assert!(loader.poll().is_none());
    }
}
