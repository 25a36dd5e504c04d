use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use log::{info, warn};
use crate::hint::{HintError, HintProvider, HintRequest};

/// Runs hint requests off the input thread. Results only ever come back as
/// text, gameplay state is never handed to the worker.
pub struct HintWorker {
    provider: Arc<dyn HintProvider>,
    pending: Option<Receiver<Result<String, HintError>>>,
}

impl HintWorker {
    pub fn new(provider: Arc<dyn HintProvider>) -> Self {
        HintWorker {
            provider,
            pending: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a request unless one is already running. Returns whether it was started.
    pub fn request(&mut self, request: HintRequest) -> bool {
        if self.pending.is_some() {
            return false;
        }
        let (tx, rx) = mpsc::channel();
        let provider = Arc::clone(&self.provider);
        info!("Requesting hint for level {}", request.level.id());
        thread::spawn(move || {
            // the receiver may be gone if the player left the level
            let _ = tx.send(provider.hint(&request));
        });
        self.pending = Some(rx);
        true
    }

    /// Non-blocking check for a finished request.
    pub fn poll(&mut self) -> Option<Result<String, HintError>> {
        let rx = self.pending.as_ref()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(HintError::WorkerGone),
        };
        self.pending = None;
        if let Err(err) = &result {
            warn!("Hint request failed: {}", err);
        }
        Some(result)
    }

    /// Blocks until the running request finishes.
    pub fn wait(&mut self) -> Option<Result<String, HintError>> {
        let rx = self.pending.take()?;
        let result = rx.recv().unwrap_or(Err(HintError::WorkerGone));
        if let Err(err) = &result {
            warn!("Hint request failed: {}", err);
        }
        Some(result)
    }

    /// Drops any running request, its answer is discarded when it arrives.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
