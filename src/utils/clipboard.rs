//! Background clipboard worker.
//!
//! Writes happen on a dedicated thread that owns the platform clipboard for the
//! life of the app. The UI thread sends numbers in and drains results each frame.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread::JoinHandle;

use crate::utils::errors::HelplineError;

/// Result of one copy request: the copied text, or why it failed
pub type CopyResult = Result<String, (String, HelplineError)>;

/// Destination for clipboard writes
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), HelplineError>;
}

/// System clipboard via arboard, opened lazily and reopened after failures
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), HelplineError> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
            log::info!("[Clipboard] System clipboard opened");
        }

        let Some(clipboard) = self.inner.as_mut() else {
            return Err(HelplineError::Clipboard("clipboard not available".to_string()));
        };

        if let Err(e) = clipboard.set_text(text.to_string()) {
            self.inner = None;
            return Err(e.into());
        }
        Ok(())
    }
}

/// Handle to the clipboard thread held by the UI
pub struct ClipboardWorker {
    request_tx: Option<Sender<String>>,
    result_rx: Receiver<CopyResult>,
    pending: usize,
    handle: Option<JoinHandle<()>>,
}

impl ClipboardWorker {
    /// Spawn a worker backed by the system clipboard
    pub fn spawn_system() -> Self {
        Self::spawn(SystemClipboard::default)
    }

    /// Spawn a worker; the sink is built on the worker thread
    pub fn spawn<F, S>(make_sink: F) -> Self
    where
        F: FnOnce() -> S + Send + 'static,
        S: ClipboardSink,
    {
        let (request_tx, request_rx) = channel::<String>();
        let (result_tx, result_rx) = channel::<CopyResult>();

        let handle = std::thread::spawn(move || {
            let mut sink = make_sink();
            for text in request_rx {
                let result = match sink.set_text(&text) {
                    Ok(()) => Ok(text),
                    Err(e) => {
                        log::warn!("[Clipboard] Write of {:?} failed: {}", text, e);
                        Err((text, e))
                    }
                };
                if result_tx.send(result).is_err() {
                    break;
                }
            }
            log::debug!("[Clipboard] Worker stopped");
        });

        Self {
            request_tx: Some(request_tx),
            result_rx,
            pending: 0,
            handle: Some(handle),
        }
    }

    /// Queue a write; the result arrives later through `drain_results`
    pub fn request_copy(&mut self, text: &str) -> Result<(), HelplineError> {
        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(text.to_string()).is_ok());

        if sent {
            self.pending += 1;
            Ok(())
        } else {
            Err(HelplineError::Clipboard("clipboard worker is not running".to_string()))
        }
    }

    /// Number of writes sent but not yet reported back
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Collect every result that is ready without blocking
    pub fn drain_results(&mut self) -> Vec<CopyResult> {
        let mut results = Vec::new();
        loop {
            match self.result_rx.try_recv() {
                Ok(result) => {
                    self.pending = self.pending.saturating_sub(1);
                    results.push(result);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.pending > 0 {
                        log::error!("[Clipboard] Worker exited with {} pending writes", self.pending);
                        self.pending = 0;
                    }
                    break;
                }
            }
        }
        results
    }

    /// Close the request channel and wait for the thread to finish
    pub fn shutdown(&mut self) {
        self.request_tx = None;
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("[Clipboard] Worker thread panicked");
            }
        }
    }
}

impl Drop for ClipboardWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    /// Records writes; fails any text listed in `refuse`
    struct MemorySink {
        written: Arc<Mutex<Vec<String>>>,
        refuse: Vec<String>,
    }

    impl ClipboardSink for MemorySink {
        fn set_text(&mut self, text: &str) -> Result<(), HelplineError> {
            if self.refuse.iter().any(|r| r == text) {
                return Err(HelplineError::Clipboard("permission denied".to_string()));
            }
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn memory_worker(refuse: &[&str]) -> (ClipboardWorker, Arc<Mutex<Vec<String>>>) {
        let written = Arc::new(Mutex::new(Vec::new()));
        let sink_written = written.clone();
        let refuse: Vec<String> = refuse.iter().map(|s| s.to_string()).collect();
        let worker = ClipboardWorker::spawn(move || MemorySink {
            written: sink_written,
            refuse,
        });
        (worker, written)
    }

    fn wait_for(worker: &mut ClipboardWorker, count: usize) -> Vec<CopyResult> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut results = Vec::new();
        while results.len() < count && Instant::now() < deadline {
            results.extend(worker.drain_results());
            std::thread::sleep(Duration::from_millis(5));
        }
        results
    }

    #[test]
    fn test_rapid_copies_each_complete() {
        let (mut worker, written) = memory_worker(&[]);
        for number in ["999", "999", "16216"] {
            worker.request_copy(number).unwrap();
        }

        let results = wait_for(&mut worker, 3);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.is_ok()));
        assert_eq!(worker.pending(), 0);
        assert_eq!(*written.lock().unwrap(), vec!["999", "999", "16216"]);
    }

    #[test]
    fn test_failed_write_reports_text_and_reason() {
        let (mut worker, written) = memory_worker(&["106"]);
        worker.request_copy("106").unwrap();
        worker.request_copy("109").unwrap();

        let results = wait_for(&mut worker, 2);
        assert_eq!(
            results,
            vec![
                Err((
                    "106".to_string(),
                    HelplineError::Clipboard("permission denied".to_string())
                )),
                Ok("109".to_string()),
            ]
        );
        assert_eq!(*written.lock().unwrap(), vec!["109"]);
    }

    #[test]
    fn test_request_after_shutdown_fails() {
        let (mut worker, _) = memory_worker(&[]);
        worker.shutdown();
        assert!(worker.request_copy("163").is_err());
        assert_eq!(worker.pending(), 0);
        assert!(worker.drain_results().is_empty());
    }
}
