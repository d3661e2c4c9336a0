//! Testing utilities for the SAP key workspace
//!
//! Shared store fixtures and a log capture for asserting on tracing output.

#![allow(missing_docs)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use parking_lot::Mutex;
use sapkey_store::{KeyRecord, KeyStore, MemoryKeyStore, SharedKeyStore, StoreError};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;

/// Field values used across the end-to-end tests
pub const SAMPLE_FIELDS: [(&str, &str); 6] = [
    ("AUART", "OR"),
    ("VKORG", "1000"),
    ("VTWEG", "10"),
    ("SPART", "00"),
    ("MATNR", "MAT123"),
    ("ZMENG", "5"),
];

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Records one minute apart, in the given order; the last key is the newest.
pub fn records(keys: &[&str]) -> Vec<KeyRecord> {
    keys.iter()
        .zip(0i64..)
        .map(|(key, i)| KeyRecord::new(*key).with_created_at(base_time() + Duration::minutes(i)))
        .collect()
}

/// In-memory store holding `keys` (see [`records`])
pub fn seeded_store(keys: &[&str]) -> SharedKeyStore {
    Arc::new(MemoryKeyStore::with_records(records(keys)).unwrap())
}

pub fn empty_store() -> SharedKeyStore {
    Arc::new(MemoryKeyStore::new())
}

/// Store whose every operation fails with a backend error
#[derive(Debug)]
pub struct FailingKeyStore {
    reason: String,
    calls: AtomicUsize,
}

impl FailingKeyStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of operations attempted so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Backend(self.reason.clone()))
    }
}

#[async_trait]
impl KeyStore for FailingKeyStore {
    async fn latest(&self) -> Result<Option<KeyRecord>, StoreError> {
        self.fail()
    }

    async fn insert(&self, _record: KeyRecord) -> Result<(), StoreError> {
        self.fail()
    }

    async fn len(&self) -> Result<usize, StoreError> {
        self.fail()
    }
}

/// Collects formatted tracing output of the current thread
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route this thread's tracing events here until the guard drops
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureWriter(Arc::clone(&self.buf))
    }
}

#[derive(Debug)]
pub struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for CaptureWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
