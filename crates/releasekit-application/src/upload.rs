// SPDX-License-Identifier: GPL-3.0-or-later

//! Multi-file audio upload.
//!
//! Files are checked synchronously on `add`; only accepted files get a
//! processing task and count as in flight. Each task owns a cancellation
//! token: removing the file cancels the work, and a result that arrives after
//! cancellation is dropped instead of committed.

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use releasekit_config::UploadConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, UploadError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("{name} is {size} bytes, the limit is {limit} bytes")]
    FileTooLarge { name: String, size: u64, limit: u64 },
    #[error("{name}: unsupported audio format")]
    UnsupportedFormat { name: String },
    #[error("{name} is empty")]
    EmptyFile { name: String },
    #[error("audio processing failed: {0}")]
    Processing(String),
    #[error("upload was cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UploadId(pub Uuid);

impl UploadId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UploadId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UploadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadFile {
    pub name: String,
    pub size_bytes: u64,
    #[serde(default)]
    pub uri: Option<String>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            uri: None,
        }
    }

    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalInfo {
    /// Upper-case container/codec name, e.g. `FLAC`.
    pub format: String,
    pub duration_secs: f64,
    pub sample_rate: u32,
    pub bit_depth: u16,
    pub channels: u16,
    #[serde(default)]
    pub bitrate_kbps: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioMetadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioProcessingResult {
    pub technical_info: TechnicalInfo,
    pub metadata: AudioMetadata,
    pub quality_score: u8,
    pub waveform: Vec<f32>,
}

/// Inspects an uploaded file. Malformed input is an error, never a panic.
#[async_trait]
pub trait AudioProcessor: Send + Sync + 'static {
    async fn process(&self, file: &UploadFile) -> Result<AudioProcessingResult>;
}

/// 0-100: format up to 40, sample rate up to 30, bit depth up to 30.
pub fn calculate_quality_score(info: &TechnicalInfo) -> u8 {
    let format = match info.format.to_ascii_uppercase().as_str() {
        "FLAC" | "WAV" => 40,
        "AIFF" => 35,
        "MP3" => 25,
        _ => 10,
    };
    let sample_rate = match info.sample_rate {
        r if r >= 96_000 => 30,
        r if r >= 48_000 => 25,
        r if r >= 44_100 => 20,
        _ => 10,
    };
    let bit_depth = match info.bit_depth {
        d if d >= 24 => 30,
        d if d >= 16 => 20,
        _ => 10,
    };
    (format + sample_rate + bit_depth).min(100)
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadStatus {
    Processing,
    Completed(AudioProcessingResult),
    Failed(String),
}

struct UploadEntry {
    file: UploadFile,
    status: UploadStatus,
    token: CancellationToken,
}

type Entries = Arc<Mutex<HashMap<UploadId, UploadEntry>>>;

pub struct UploadQueue<P: AudioProcessor> {
    processor: Arc<P>,
    config: UploadConfig,
    entries: Entries,
    in_flight: Arc<AtomicUsize>,
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl<P: AudioProcessor> UploadQueue<P> {
    pub fn new(processor: P, config: UploadConfig) -> Self {
        Self {
            processor: Arc::new(processor),
            config,
            entries: Arc::new(Mutex::new(HashMap::new())),
            in_flight: Arc::new(AtomicUsize::new(0)),
            handles: Mutex::new(Vec::new()),
        }
    }

    pub fn validate(&self, file: &UploadFile) -> Result<()> {
        if file.size_bytes == 0 {
            return Err(UploadError::EmptyFile {
                name: file.name.clone(),
            });
        }
        if file.size_bytes > self.config.max_file_size_bytes {
            return Err(UploadError::FileTooLarge {
                name: file.name.clone(),
                size: file.size_bytes,
                limit: self.config.max_file_size_bytes,
            });
        }
        let allowed = file.extension().is_some_and(|ext| {
            self.config
                .allowed_formats
                .iter()
                .any(|format| format.eq_ignore_ascii_case(&ext))
        });
        if !allowed {
            return Err(UploadError::UnsupportedFormat {
                name: file.name.clone(),
            });
        }
        Ok(())
    }

    /// Validates and starts processing. Must be called inside a tokio runtime.
    pub fn add(&self, file: UploadFile) -> Result<UploadId> {
        if let Err(err) = self.validate(&file) {
            warn!(target: "upload", file = %file.name, error = %err, "file rejected");
            return Err(err);
        }

        let id = UploadId::new();
        let token = CancellationToken::new();
        self.entries.lock().expect("upload entries lock poisoned").insert(
            id,
            UploadEntry {
                file: file.clone(),
                status: UploadStatus::Processing,
                token: token.clone(),
            },
        );
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        debug!(target: "upload", %id, file = %file.name, "processing started");

        let processor = Arc::clone(&self.processor);
        let entries = Arc::clone(&self.entries);
        let in_flight = Arc::clone(&self.in_flight);
        let handle = tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = token.cancelled() => Err(UploadError::Cancelled),
                result = processor.process(&file) => result,
            };
            commit(&entries, id, &token, outcome);
            in_flight.fetch_sub(1, Ordering::SeqCst);
        });
        let mut handles = self.handles.lock().expect("upload handles lock poisoned");
        handles.retain(|handle| !handle.is_finished());
        handles.push(handle);

        Ok(id)
    }

    /// Drops the file and cancels its processing task if still running.
    pub fn remove(&self, id: UploadId) -> Option<UploadFile> {
        let entry = self
            .entries
            .lock()
            .expect("upload entries lock poisoned")
            .remove(&id)?;
        entry.token.cancel();
        info!(target: "upload", %id, file = %entry.file.name, "upload removed");
        Some(entry.file)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn status(&self, id: UploadId) -> Option<UploadStatus> {
        self.entries
            .lock()
            .expect("upload entries lock poisoned")
            .get(&id)
            .map(|entry| entry.status.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("upload entries lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn completed(&self) -> Vec<(UploadFile, AudioProcessingResult)> {
        self.entries
            .lock()
            .expect("upload entries lock poisoned")
            .values()
            .filter_map(|entry| match &entry.status {
                UploadStatus::Completed(result) => Some((entry.file.clone(), result.clone())),
                _ => None,
            })
            .collect()
    }

    /// Waits for every task spawned so far.
    pub async fn wait_idle(&self) {
        let handles = std::mem::take(&mut *self.handles.lock().expect("upload handles lock poisoned"));
        for handle in handles {
            if let Err(err) = handle.await {
                warn!(target: "upload", error = %err, "processing task panicked");
            }
        }
    }
}

fn commit(entries: &Entries, id: UploadId, token: &CancellationToken, outcome: Result<AudioProcessingResult>) {
    if token.is_cancelled() {
        debug!(target: "upload", %id, "result discarded after cancellation");
        return;
    }
    let mut guard = entries.lock().expect("upload entries lock poisoned");
    let Some(entry) = guard.get_mut(&id) else {
        return;
    };
    entry.status = match outcome {
        Ok(result) => {
            info!(target: "upload", %id, quality = result.quality_score, "processing completed");
            UploadStatus::Completed(result)
        }
        Err(err) => {
            warn!(target: "upload", %id, error = %err, "processing failed");
            UploadStatus::Failed(err.to_string())
        }
    };
}
