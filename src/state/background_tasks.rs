use crate::utils::clipboard::{ClipboardWorker, CopyResult};

pub struct BackgroundTasks {
    // Clipboard writes (one worker thread for the app lifetime)
    pub clipboard: ClipboardWorker,
}

impl BackgroundTasks {
    pub fn new(clipboard: ClipboardWorker) -> Self {
        Self { clipboard }
    }

    /// Check if any background task is still outstanding
    pub fn has_active_tasks(&self) -> bool {
        self.clipboard.pending() > 0
    }

    /// Collect finished clipboard writes
    pub fn drain_clipboard(&mut self) -> Vec<CopyResult> {
        self.clipboard.drain_results()
    }

    /// Stop workers (for cleanup)
    pub fn clear_all(&mut self) {
        self.clipboard.shutdown();
    }
}
