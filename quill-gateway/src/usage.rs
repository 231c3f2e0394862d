//! In-memory request counters.
//!
//! Counts every API request plus per-tool hits on the transform endpoints.
//! Nothing is persisted; the totals are logged once at shutdown.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        RwLock,
    },
};

use serde::Serialize;
use tracing::info;

/// Smallest and largest accepted `limit` for [`UsageTracker::top`].
pub const TOP_LIMIT_RANGE: std::ops::RangeInclusive<usize> = 1..=20;

/// Default number of tools returned by `/stats/tools`.
pub const DEFAULT_TOP_LIMIT: usize = 6;

/// Per-tool hit count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolUsage {
    pub id: String,
    pub count: u64,
}

/// Maps a request path to the tool key it is counted under, if any.
#[must_use]
pub fn tool_key(path: &str) -> Option<&'static str> {
    match path.trim_end_matches('/') {
        "/encode" => Some("universal-encode"),
        "/decode" => Some("universal-decode"),
        "/encodings" => Some("list-encodings"),
        "/chain" => Some("chain-transform"),
        _ => None,
    }
}

/// Thread-safe usage counters, shared through the router state.
#[derive(Debug, Default)]
pub struct UsageTracker {
    total: AtomicU64,
    tools: RwLock<HashMap<&'static str, u64>>,
}

impl UsageTracker {
    /// Create a tracker with every counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one request to `path`.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn record(&self, path: &str) {
        self.total.fetch_add(1, Ordering::Relaxed);
        if let Some(key) = tool_key(path) {
            #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
            let mut tools = self.tools.write().expect("usage tracker write lock poisoned");
            *tools.entry(key).or_insert(0) += 1;
        }
    }

    /// Total number of recorded requests.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// The most used tools, busiest first, ties broken by id.
    ///
    /// `limit` is clamped to [`TOP_LIMIT_RANGE`].
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn top(&self, limit: usize) -> Vec<ToolUsage> {
        let limit = limit.clamp(*TOP_LIMIT_RANGE.start(), *TOP_LIMIT_RANGE.end());
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let tools = self.tools.read().expect("usage tracker read lock poisoned");
        let mut ranked: Vec<ToolUsage> = tools
            .iter()
            .map(|(id, count)| ToolUsage { id: (*id).to_owned(), count: *count })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id)));
        ranked.truncate(limit);
        ranked
    }

    /// Logs the final counters. Called once after the server stops.
    pub fn flush(&self) {
        let top = self.top(*TOP_LIMIT_RANGE.end());
        info!(total_requests = self.total(), tools = ?top, "usage summary");
    }
}
