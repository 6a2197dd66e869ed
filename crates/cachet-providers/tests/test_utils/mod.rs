//! Test doubles shared by the provider test suites
//!
//! - [`RecordingStore`]: in-memory `KeyValueStore` that records every call
//!   and can be scripted to misbehave (lost races, scan failures, deletes
//!   that report nothing removed).
//! - [`RecordingCache`]: `SimpleCache` with scripted answers, for checking
//!   what decorators forward.

#![allow(dead_code)]

use async_trait::async_trait;
use cachet_domain::error::{Error, Result};
use cachet_domain::ports::{KeyValueStore, PrefixedCache, SimpleCache};
use cachet_domain::value_objects::Ttl;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// A call received by [`RecordingStore`]
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Get(String),
    Set(String, Vec<u8>),
    SetWithExpiry(String, Vec<u8>, i64),
    Delete(String),
    Exists(String),
    KeysMatching(String),
}

/// Scripted answer for `keys_matching`
#[derive(Debug, Clone)]
pub enum ScanScript {
    /// Return these keys verbatim
    Keys(Vec<String>),
    /// Fail with a pattern rejection
    InvalidPattern,
    /// Fail with a connectivity error
    Unavailable,
}

fn unavailable(reason: &str) -> Error {
    Error::store_with_source(
        format!("store unavailable: {}", reason),
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, reason.to_string()),
    )
}

#[derive(Debug, Default)]
pub struct RecordingStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    calls: Mutex<Vec<StoreCall>>,
    scan: Mutex<Option<ScanScript>>,
    delete_results: Mutex<VecDeque<u64>>,
    exists_override: Mutex<Option<u64>>,
    fail_reads: Mutex<bool>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw payload without recording a call
    pub fn insert_raw(&self, key: &str, payload: &[u8]) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), payload.to_vec());
    }

    /// Seed a JSON value without recording a call
    pub fn insert_json(&self, key: &str, value: &Value) {
        self.insert_raw(key, &serde_json::to_vec(value).unwrap());
    }

    pub fn script_scan(&self, script: ScanScript) {
        *self.scan.lock().unwrap() = Some(script);
    }

    /// Answers for consecutive `delete` calls (1 = removed, 0 = nothing)
    pub fn script_deletes(&self, results: &[u64]) {
        *self.delete_results.lock().unwrap() = results.iter().copied().collect();
    }

    /// Make `exists` report this count regardless of contents
    pub fn script_exists(&self, count: u64) {
        *self.exists_override.lock().unwrap() = Some(count);
    }

    /// Make `get` and `exists` fail with a store error
    pub fn fail_reads(&self) {
        *self.fail_reads.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_reads(&self) -> Result<()> {
        if *self.fail_reads.lock().unwrap() {
            return Err(unavailable("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for RecordingStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.record(StoreCall::Get(key.to_string()));
        self.check_reads()?;
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.record(StoreCall::Set(key.to_string(), value.clone()));
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn set_with_expiry(&self, key: &str, value: Vec<u8>, seconds: i64) -> Result<()> {
        self.record(StoreCall::SetWithExpiry(
            key.to_string(),
            value.clone(),
            seconds,
        ));
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<u64> {
        self.record(StoreCall::Delete(key.to_string()));
        let removed = u64::from(self.entries.lock().unwrap().remove(key).is_some());
        Ok(self
            .delete_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(removed))
    }

    async fn exists(&self, key: &str) -> Result<u64> {
        self.record(StoreCall::Exists(key.to_string()));
        self.check_reads()?;
        if let Some(count) = *self.exists_override.lock().unwrap() {
            return Ok(count);
        }
        Ok(u64::from(self.entries.lock().unwrap().contains_key(key)))
    }

    async fn keys_matching(&self, pattern: &str) -> Result<Vec<String>> {
        self.record(StoreCall::KeysMatching(pattern.to_string()));
        match self.scan.lock().unwrap().clone() {
            Some(ScanScript::Keys(keys)) => Ok(keys),
            Some(ScanScript::InvalidPattern) => {
                Err(Error::invalid_pattern(pattern, "rejected by store"))
            }
            Some(ScanScript::Unavailable) => Err(unavailable("connection reset")),
            None => {
                let prefix = pattern.trim_end_matches('*');
                let mut keys: Vec<String> = self
                    .entries
                    .lock()
                    .unwrap()
                    .keys()
                    .filter(|k| k.starts_with(prefix))
                    .cloned()
                    .collect();
                keys.sort();
                Ok(keys)
            }
        }
    }

    fn store_name(&self) -> &str {
        "recording"
    }
}

/// A call received by [`RecordingCache`]
#[derive(Debug, Clone, PartialEq)]
pub enum CacheCall {
    Get(String, Option<Value>),
    Set(String, Value, Option<Ttl>),
    Delete(String),
    Clear,
    Has(String),
}

#[derive(Debug)]
pub struct RecordingCache {
    prefix: String,
    calls: Mutex<Vec<CacheCall>>,
    has_result: bool,
    get_result: Option<Value>,
    write_results: Mutex<VecDeque<bool>>,
    clear_result: bool,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
            calls: Mutex::new(Vec::new()),
            has_result: false,
            get_result: None,
            write_results: Mutex::new(VecDeque::new()),
            clear_result: true,
        }
    }

    /// Report this prefix through `PrefixedCache`
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// Answer for every `has`
    pub fn with_has(mut self, exists: bool) -> Self {
        self.has_result = exists;
        self
    }

    /// Answer for every `get`
    pub fn with_get(mut self, value: Option<Value>) -> Self {
        self.get_result = value;
        self
    }

    /// Answers for consecutive `set`/`delete` calls (default `true`)
    pub fn with_write_results(self, results: &[bool]) -> Self {
        *self.write_results.lock().unwrap() = results.iter().copied().collect();
        self
    }

    pub fn with_clear(mut self, result: bool) -> Self {
        self.clear_result = result;
        self
    }

    pub fn calls(&self) -> Vec<CacheCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: CacheCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_write(&self) -> bool {
        self.write_results.lock().unwrap().pop_front().unwrap_or(true)
    }
}

#[async_trait]
impl SimpleCache for RecordingCache {
    async fn get(&self, key: &str, default: Option<Value>) -> Result<Option<Value>> {
        self.record(CacheCall::Get(key.to_string(), default));
        Ok(self.get_result.clone())
    }

    async fn set(&self, key: &str, value: Value, ttl: Option<Ttl>) -> Result<bool> {
        self.record(CacheCall::Set(key.to_string(), value, ttl));
        Ok(self.next_write())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        self.record(CacheCall::Delete(key.to_string()));
        Ok(self.next_write())
    }

    async fn clear(&self) -> Result<bool> {
        self.record(CacheCall::Clear);
        Ok(self.clear_result)
    }

    async fn has(&self, key: &str) -> Result<bool> {
        self.record(CacheCall::Has(key.to_string()));
        Ok(self.has_result)
    }

    fn name(&self) -> &str {
        "recording"
    }
}

impl PrefixedCache for RecordingCache {
    fn prefix(&self) -> &str {
        &self.prefix
    }
}
