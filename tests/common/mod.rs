//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use autocomplete_suggest::error::{Result, SuggestError};
use autocomplete_suggest::search::SuggestionIndex;
use autocomplete_suggest::store::{InMemoryIndexStore, IndexStore};
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

pub const INSTRUMENTS: [&str; 3] = ["MODIS", "MODIS-TERRA", "ASTER"];

pub const PLATFORMS: [&str; 6] = [
    "Aqua",
    "Terra",
    "Aura",
    "Suomi-NPP",
    "NOAA-20",
    "Landsat-8",
];

/// Serialize an index built from `values`
pub fn snapshot_of(values: &[&str]) -> Vec<u8> {
    SuggestionIndex::build(values)
        .expect("index builds")
        .export()
        .expect("index exports")
}

/// In-memory store with an "instrument" index
pub fn instrument_store() -> InMemoryIndexStore {
    let store = InMemoryIndexStore::new();
    store.insert("instrument", snapshot_of(&INSTRUMENTS));
    store
}

/// Store whose reads always fail, counting how often it was asked
#[derive(Default)]
pub struct FailingStore {
    pub calls: AtomicUsize,
}

impl FailingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IndexStore for FailingStore {
    async fn get_index(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(SuggestError::Store("Connection refused (os error 111)".to_string()))
    }
}

/// JSON log lines collected by a thread-local subscriber
#[derive(Clone, Default)]
pub struct CapturedLogs {
    output: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    /// Install a subscriber recording every event on this thread until the guard drops
    pub fn install() -> (Self, tracing::subscriber::DefaultGuard) {
        let logs = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(logs.clone())
            .finish();

        (logs, tracing::subscriber::set_default(subscriber))
    }

    /// Events emitted by the suggestion resolver
    pub fn resolver_events(&self) -> Vec<serde_json::Value> {
        let output = self.output.lock().unwrap();
        String::from_utf8_lossy(&output)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
            .filter(|event| {
                event["target"]
                    .as_str()
                    .is_some_and(|target| target.starts_with("autocomplete_suggest::suggest"))
            })
            .collect()
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter {
            output: self.output.clone(),
        }
    }
}

pub struct CapturedWriter {
    output: Arc<Mutex<Vec<u8>>>,
}

impl Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Parse Prometheus exposition format into metric name -> lines
pub fn parse_prometheus_output(output: &str) -> HashMap<String, Vec<String>> {
    let mut metrics = HashMap::new();
    let mut current_metric = String::new();

    for line in output.lines() {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with("# HELP") || line.starts_with("# TYPE") {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() >= 3 {
                current_metric = parts[2].to_string();
                metrics
                    .entry(current_metric.clone())
                    .or_insert_with(Vec::new)
                    .push(line.to_string());
            }
        } else if !line.starts_with('#') && !current_metric.is_empty() {
            metrics
                .entry(current_metric.clone())
                .or_insert_with(Vec::new)
                .push(line.to_string());
        }
    }

    metrics
}
