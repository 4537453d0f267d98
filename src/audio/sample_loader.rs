use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::traits::audio::{AudioBackend, SampleId};

/// Shared between the owner and the reader thread.
#[derive(Default)]
struct LoadTaskState {
    complete: bool,
    result: Option<Result<Vec<u8>>>,
}

/// Fire-once background read of a sample file.
///
/// The file is read on a worker thread; the owner polls for the bytes and
/// hands them to the audio backend on its own thread.
pub struct SampleLoadTask {
    path: PathBuf,
    state: Arc<Mutex<LoadTaskState>>,
    worker: Option<JoinHandle<()>>,
}

impl SampleLoadTask {
    /// Start reading `path` in the background.
    pub fn start(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = Arc::new(Mutex::new(LoadTaskState::default()));

        let state_clone = state.clone();
        let path_clone = path.clone();
        let worker = std::thread::spawn(move || {
            let result = std::fs::read(&path_clone)
                .with_context(|| format!("Failed to read sample {}", path_clone.display()));
            let mut s = state_clone.lock().unwrap_or_else(PoisonError::into_inner);
            s.result = Some(result);
            s.complete = true;
        });

        Self {
            path,
            state,
            worker: Some(worker),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File extension used to pick a decoder.
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }

    pub fn is_complete(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .complete
    }

    /// Take the read result. Returns `None` until the read finishes and
    /// after the result has been taken once.
    pub fn poll(&self) -> Option<Result<Vec<u8>>> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .result
            .take()
    }

    /// Block until the worker finishes.
    pub fn wait(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("sample reader for {} panicked", self.path.display());
            }
        }
    }
}

/// Availability of one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleStatus {
    /// Not loaded yet (or never requested).
    Pending,
    Ready(SampleId),
    /// Load failed; no retry is attempted.
    Failed,
    /// Released at shutdown.
    Released,
}

/// A named sample plus its in-flight load, exposing a ready flag.
pub struct SampleSlot {
    label: &'static str,
    status: SampleStatus,
    task: Option<SampleLoadTask>,
}

impl SampleSlot {
    /// An empty slot that never becomes ready on its own.
    pub fn pending(label: &'static str) -> Self {
        Self {
            label,
            status: SampleStatus::Pending,
            task: None,
        }
    }

    /// A slot waiting on a background read.
    pub fn loading(label: &'static str, task: SampleLoadTask) -> Self {
        Self {
            label,
            status: SampleStatus::Pending,
            task: Some(task),
        }
    }

    /// A slot whose sample is already in the backend.
    pub fn ready(label: &'static str, sample: SampleId) -> Self {
        Self {
            label,
            status: SampleStatus::Ready(sample),
            task: None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn status(&self) -> SampleStatus {
        self.status
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.status, SampleStatus::Ready(_))
    }

    pub fn sample(&self) -> Option<SampleId> {
        match self.status {
            SampleStatus::Ready(id) => Some(id),
            _ => None,
        }
    }

    /// Finish a completed background read by decoding it into `backend`.
    /// Returns true when the slot became ready during this call.
    pub fn poll<A: AudioBackend>(&mut self, backend: &mut A) -> bool {
        let Some(task) = self.task.as_ref() else {
            return false;
        };
        let Some(read) = task.poll() else {
            return false;
        };
        let ext = task.extension();
        let path = task.path().display().to_string();
        self.task = None;

        match read.and_then(|bytes| backend.load_sample_from_memory(&bytes, &ext)) {
            Ok(id) => {
                info!("{} sample ready: {path}", self.label);
                self.status = SampleStatus::Ready(id);
                true
            }
            Err(e) => {
                warn!("{} sample failed to load: {e:#}", self.label);
                self.status = SampleStatus::Failed;
                false
            }
        }
    }

    /// Release the loaded sample, if any.
    pub fn release<A: AudioBackend>(&mut self, backend: &mut A) -> Result<()> {
        if let SampleStatus::Ready(id) = self.status {
            backend.release_sample(id)?;
            debug!("{} sample released", self.label);
            self.status = SampleStatus::Released;
        }
        self.task = None;
        Ok(())
    }
}
