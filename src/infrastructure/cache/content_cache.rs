use std::{
    any::Any,
    future::Future,
    sync::Arc,
    time::{Duration, Instant},
};

use dashmap::DashMap;

use crate::entities::legal_doc::LegalDocType;

/// Public views the cache holds, one per collection or singleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Projects,
    Skills,
    Testimonials,
    About,
    Legal(LegalDocType),
}

struct CacheEntry {
    value: Arc<dyn Any + Send + Sync>,
    stored_at: Instant,
}

/// Per-key state. `generation` moves on every invalidation and the slot is
/// never removed, so a load that raced an invalidation can be told apart.
#[derive(Default)]
struct Slot {
    generation: u64,
    entry: Option<CacheEntry>,
}

/// Short-lived store for public reads. Admin mutations invalidate their key.
#[derive(Clone)]
pub struct ContentCache {
    slots: Arc<DashMap<CacheKey, Slot>>,
    ttl: Duration,
}

impl ContentCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slots: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Fresh value for `key` if any, plus the generation the caller loads against.
    fn lookup<T: Send + Sync + 'static>(&self, key: CacheKey) -> (Option<Arc<T>>, u64) {
        let Some(slot) = self.slots.get(&key) else {
            return (None, 0);
        };
        let hit = slot
            .entry
            .as_ref()
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .and_then(|entry| entry.value.clone().downcast::<T>().ok());
        (hit, slot.generation)
    }

    /// Returns the cached value for `key`, or runs `load` and caches its result.
    /// Errors are never cached, and neither is a result whose key was
    /// invalidated while it was loading.
    pub async fn get_or_load<T, E, F, Fut>(&self, key: CacheKey, load: F) -> Result<Arc<T>, E>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let (hit, generation) = self.lookup::<T>(key);
        if let Some(hit) = hit {
            tracing::debug!(?key, "content cache hit");
            return Ok(hit);
        }

        let value = Arc::new(load().await?);

        let mut slot = self.slots.entry(key).or_default();
        if slot.generation == generation {
            slot.entry = Some(CacheEntry {
                value: value.clone(),
                stored_at: Instant::now(),
            });
        } else {
            tracing::debug!(?key, "content cache invalidated during load, result not stored");
        }
        Ok(value)
    }

    pub fn invalidate(&self, key: CacheKey) {
        let mut slot = self.slots.entry(key).or_default();
        slot.generation += 1;
        if slot.entry.take().is_some() {
            tracing::debug!(?key, "content cache invalidated");
        }
    }

    pub fn clear(&self) {
        for mut slot in self.slots.iter_mut() {
            slot.generation += 1;
            slot.entry = None;
        }
    }

    /// Drops entries older than the TTL. Returns how many were removed.
    pub fn evict_expired(&self) -> usize {
        let mut evicted = 0;
        for mut slot in self.slots.iter_mut() {
            if slot.entry.as_ref().is_some_and(|e| e.stored_at.elapsed() >= self.ttl) {
                slot.entry = None;
                evicted += 1;
            }
        }
        evicted
    }

    /// Number of keys currently holding a value.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.entry.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn load_count(cache: &ContentCache, calls: &AtomicUsize) -> Arc<Vec<u32>> {
        cache
            .get_or_load(CacheKey::Projects, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, ()>(vec![1, 2, 3])
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn serves_second_read_from_cache() {
        let cache = ContentCache::new(Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        load_count(&cache, &calls).await;
        let second = load_count(&cache, &calls).await;

        assert_eq!(*second, vec![1, 2, 3]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalidate_forces_reload() {
        let cache = ContentCache::new(Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        load_count(&cache, &calls).await;
        cache.invalidate(CacheKey::Projects);
        load_count(&cache, &calls).await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn zero_ttl_never_serves_stale_data() {
        let cache = ContentCache::new(Duration::ZERO);
        let calls = AtomicUsize::new(0);

        load_count(&cache, &calls).await;
        load_count(&cache, &calls).await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.evict_expired(), 1);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let cache = ContentCache::new(Duration::from_secs(60));

        let failed: Result<Arc<u8>, &str> = cache
            .get_or_load(CacheKey::About, || async { Err("boom") })
            .await;
        assert!(failed.is_err());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn legal_documents_have_separate_entries() {
        let cache = ContentCache::new(Duration::from_secs(60));
        let privacy = cache
            .get_or_load(CacheKey::Legal(LegalDocType::PrivacyPolicy), || async {
                Ok::<_, ()>("privacy".to_string())
            })
            .await
            .unwrap();
        let terms = cache
            .get_or_load(CacheKey::Legal(LegalDocType::TermsOfService), || async {
                Ok::<_, ()>("terms".to_string())
            })
            .await
            .unwrap();

        assert_eq!(*privacy, "privacy");
        assert_eq!(*terms, "terms");
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn load_racing_an_invalidation_is_not_cached() {
        let cache = ContentCache::new(Duration::from_secs(60));
        let (started_tx, started_rx) = tokio::sync::oneshot::channel::<()>();
        let (release_tx, release_rx) = tokio::sync::oneshot::channel::<()>();

        let racing = cache.clone();
        let stale_read = tokio::spawn(async move {
            racing
                .get_or_load(CacheKey::Projects, || async move {
                    started_tx.send(()).ok();
                    release_rx.await.ok();
                    Ok::<_, ()>(vec!["old".to_string()])
                })
                .await
                .unwrap()
        });

        started_rx.await.unwrap();
        cache.invalidate(CacheKey::Projects);
        release_tx.send(()).unwrap();

        let stale = stale_read.await.unwrap();
        assert_eq!(*stale, vec!["old".to_string()]);
        assert!(cache.is_empty());

        let fresh = cache
            .get_or_load(CacheKey::Projects, || async { Ok::<_, ()>(vec!["new".to_string()]) })
            .await
            .unwrap();
        assert_eq!(*fresh, vec!["new".to_string()]);
    }

    #[tokio::test]
    async fn eviction_empties_stale_slots() {
        let cache = ContentCache::new(Duration::ZERO);
        let calls = AtomicUsize::new(0);

        load_count(&cache, &calls).await;
        assert_eq!(cache.evict_expired(), 1);
        assert!(cache.is_empty());
        assert_eq!(cache.evict_expired(), 0);
    }
}
