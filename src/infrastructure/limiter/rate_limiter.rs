use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use dashmap::DashMap;
use parking_lot::Mutex;

/// Sliding window that weights the previous window's count by how much of it
/// still overlaps the current one.
#[derive(Debug)]
pub struct SlidingWindow {
    window_size: Duration,
    limit: u64,
    current_window_start: Instant,
    current_count: u64,
    prev_count: u64,
    last_seen: Instant,
}

impl SlidingWindow {
    fn new(window_size: Duration, limit: u64) -> Self {
        let now = Instant::now();
        Self {
            window_size,
            limit,
            current_window_start: now,
            current_count: 0,
            prev_count: 0,
            last_seen: now,
        }
    }

    fn roll(&mut self, now: Instant) {
        let elapsed = now.duration_since(self.current_window_start);
        if elapsed >= self.window_size * 2 {
            self.prev_count = 0;
            self.current_count = 0;
            self.current_window_start = now;
        } else if elapsed >= self.window_size {
            self.prev_count = self.current_count;
            self.current_count = 0;
            self.current_window_start += self.window_size;
        }
    }

    /// Seconds to wait if a hit now would exceed the limit.
    fn retry_after(&mut self, now: Instant) -> Option<u64> {
        self.last_seen = now;
        self.roll(now);

        let elapsed = now.duration_since(self.current_window_start);
        let weight = elapsed.as_secs_f64() / self.window_size.as_secs_f64();
        let effective = (self.prev_count as f64) * (1.0 - weight) + (self.current_count as f64);

        if effective < self.limit as f64 {
            None
        } else {
            let remaining = self.window_size.saturating_sub(elapsed);
            Some(remaining.as_secs_f64().ceil().max(1.0) as u64)
        }
    }
}

type Key = String;

#[derive(Clone)]
pub struct RateLimiterStore {
    map: Arc<DashMap<Key, Arc<Mutex<SlidingWindow>>>>,
    window_size: Duration,
    limit: u64,
}

impl RateLimiterStore {
    pub fn new(window_size: Duration, limit: u64) -> Self {
        Self {
            map: Arc::new(DashMap::new()),
            window_size,
            limit,
        }
    }

    fn get_window(&self, key: &str) -> Arc<Mutex<SlidingWindow>> {
        if let Some(existing) = self.map.get(key) {
            return existing.clone();
        }
        self.map
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(SlidingWindow::new(self.window_size, self.limit))))
            .clone()
    }

    /// Counts a hit against `key`. `Err` carries the Retry-After in seconds.
    pub fn check(&self, key: &str) -> Result<(), u64> {
        self.check_all(&[key])
    }

    /// Counts one hit against every key, or against none of them when any key
    /// is already at its limit. `Err` carries the longest Retry-After.
    pub fn check_all(&self, keys: &[&str]) -> Result<(), u64> {
        let mut distinct: Vec<&str> = keys.to_vec();
        distinct.sort_unstable();
        distinct.dedup();

        let windows: Vec<_> = distinct.iter().map(|key| self.get_window(key)).collect();
        let mut guards: Vec<_> = windows.iter().map(|window| window.lock()).collect();

        let now = Instant::now();
        let wait = guards.iter_mut().filter_map(|w| w.retry_after(now)).max();
        if let Some(retry_after) = wait {
            return Err(retry_after);
        }

        for w in guards.iter_mut() {
            w.current_count += 1;
        }
        Ok(())
    }

    /// Drops keys untouched for two full windows. Returns how many were removed.
    pub fn evict_idle(&self) -> usize {
        let now = Instant::now();
        let idle_after = self.window_size * 2;
        let before = self.map.len();
        self.map
            .retain(|_, window| now.duration_since(window.lock().last_seen) <= idle_after);
        before - self.map.len()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
