//! Memoization.
//!
//! [`memoize`] keys the cache by the argument itself, so two structurally
//! equal arguments (by `Hash` + `Eq`) share one entry regardless of where
//! they were allocated. Functions of several arguments take a tuple.
//! [`memoize_by`] derives the key with a caller-supplied function instead.
//!
//! The cache is unbounded by default. [`MemoizeConfig::capacity`] switches
//! it to least-recently-used eviction.
//!
//! The cache lock is never held while the wrapped function runs, so a
//! memoized function may call itself through a shared reference. Two
//! concurrent misses on the same key both run the function; the later
//! result overwrites the earlier one.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use lru::LruCache;
use parking_lot::Mutex;

#[cfg(feature = "fxhash")]
type CacheHasher = rustc_hash::FxBuildHasher;
#[cfg(not(feature = "fxhash"))]
type CacheHasher = std::collections::hash_map::RandomState;

/// Cache configuration for memoized functions.
///
/// ```
/// use std::num::NonZeroUsize;
/// use funkit::compose::MemoizeConfig;
///
/// let bounded = MemoizeConfig::new().capacity(NonZeroUsize::new(128).unwrap());
/// assert_eq!(bounded.max_entries(), NonZeroUsize::new(128));
/// assert_eq!(MemoizeConfig::default().max_entries(), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoizeConfig {
    capacity: Option<NonZeroUsize>,
}

impl MemoizeConfig {
    /// An unbounded configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self { capacity: None }
    }

    /// Bounds the cache to `capacity` entries with LRU eviction.
    #[must_use]
    pub const fn capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Removes any bound.
    #[must_use]
    pub const fn unbounded(mut self) -> Self {
        self.capacity = None;
        self
    }

    /// The configured bound, if any.
    #[must_use]
    pub const fn max_entries(&self) -> Option<NonZeroUsize> {
        self.capacity
    }
}

enum Store<K, V> {
    Unbounded(HashMap<K, V, CacheHasher>),
    Bounded(LruCache<K, V, CacheHasher>),
}

impl<K: Hash + Eq, V: Clone> Store<K, V> {
    fn new(config: MemoizeConfig) -> Self {
        match config.capacity {
            None => Self::Unbounded(HashMap::with_hasher(CacheHasher::default())),
            Some(capacity) => {
                Self::Bounded(LruCache::with_hasher(capacity, CacheHasher::default()))
            }
        }
    }

    fn lookup(&mut self, key: &K) -> Option<V> {
        match self {
            Self::Unbounded(map) => map.get(key).cloned(),
            Self::Bounded(lru) => lru.get(key).cloned(),
        }
    }

    /// Returns `true` when an older entry was evicted to make room.
    fn store(&mut self, key: K, value: V) -> bool {
        match self {
            Self::Unbounded(map) => {
                map.insert(key, value);
                false
            }
            Self::Bounded(lru) => {
                let existed = lru.contains(&key);
                lru.push(key, value).is_some() && !existed
            }
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Unbounded(map) => map.len(),
            Self::Bounded(lru) => lru.len(),
        }
    }

    fn clear(&mut self) {
        match self {
            Self::Unbounded(map) => map.clear(),
            Self::Bounded(lru) => lru.clear(),
        }
    }
}

/// The cache shared by the sync and async memoizers.
struct MemoCache<K, V> {
    store: Mutex<Store<K, V>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K: Hash + Eq, V: Clone> MemoCache<K, V> {
    fn new(config: MemoizeConfig) -> Self {
        Self {
            store: Mutex::new(Store::new(config)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    fn lookup(&self, key: &K) -> Option<V> {
        let cached = self.store.lock().lookup(key);
        if cached.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("memo cache hit");
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("memo cache miss");
        }
        cached
    }

    fn store(&self, key: K, value: V) {
        let evicted = self.store.lock().store(key, value);
        if evicted {
            tracing::debug!("memo cache evicted least recently used entry");
        }
    }

    fn stats(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }

    fn len(&self) -> usize {
        self.store.lock().len()
    }

    fn clear(&self) {
        self.store.lock().clear();
    }
}

/// A function whose results are cached by key.
pub struct Memoized<A, K, R, F, KF> {
    function: F,
    key_function: KF,
    cache: MemoCache<K, R>,
    _marker: PhantomData<fn(A) -> R>,
}

/// Memoizes `function`, keyed by its argument.
///
/// ```
/// use std::cell::Cell;
/// use funkit::compose::memoize;
///
/// let calls = Cell::new(0);
/// let square = memoize(|x: u64| {
///     calls.set(calls.get() + 1);
///     x * x
/// });
///
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.call(12), 144);
/// assert_eq!(calls.get(), 1);
/// ```
pub fn memoize<A, R, F>(function: F) -> Memoized<A, A, R, F, fn(&A) -> A>
where
    A: Clone + Hash + Eq,
    R: Clone,
    F: Fn(A) -> R,
{
    memoize_by(function, <A as Clone>::clone as fn(&A) -> A)
}

/// Memoizes `function`, keyed by `key_function(&argument)`.
///
/// ```
/// use funkit::compose::memoize_by;
///
/// // Case-insensitive cache: "Ada" and "ADA" share an entry.
/// let length = memoize_by(|name: String| name.len(), |name: &String| name.to_lowercase());
/// length.call("Ada".to_string());
/// length.call("ADA".to_string());
/// assert_eq!(length.len(), 1);
/// ```
pub fn memoize_by<A, K, R, F, KF>(function: F, key_function: KF) -> Memoized<A, K, R, F, KF>
where
    K: Hash + Eq,
    R: Clone,
    F: Fn(A) -> R,
    KF: Fn(&A) -> K,
{
    Memoized {
        function,
        key_function,
        cache: MemoCache::new(MemoizeConfig::default()),
        _marker: PhantomData,
    }
}

impl<A, K, R, F, KF> Memoized<A, K, R, F, KF>
where
    K: Hash + Eq,
    R: Clone,
    F: Fn(A) -> R,
    KF: Fn(&A) -> K,
{
    /// Replaces the cache with one built from `config`.
    #[must_use]
    pub fn with_config(mut self, config: MemoizeConfig) -> Self {
        self.cache = MemoCache::new(config);
        self
    }

    /// Returns the cached result for `argument`, computing it on a miss.
    pub fn call(&self, argument: A) -> R {
        let key = (self.key_function)(&argument);
        if let Some(cached) = self.cache.lookup(&key) {
            return cached;
        }
        let result = (self.function)(argument);
        self.cache.store(key, result.clone());
        result
    }

    /// Borrows this memoizer as a plain closure, for use with `compose!`.
    pub fn as_fn(&self) -> impl Fn(A) -> R + '_ {
        move |argument| self.call(argument)
    }

    /// Number of cache hits so far.
    pub fn hits(&self) -> u64 {
        self.cache.stats().0
    }

    /// Number of cache misses so far.
    pub fn misses(&self) -> u64 {
        self.cache.stats().1
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.cache.clear();
    }
}

impl<A, K, R, F, KF> fmt::Debug for Memoized<A, K, R, F, KF> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hits, misses) = (
            self.cache.hits.load(Ordering::Relaxed),
            self.cache.misses.load(Ordering::Relaxed),
        );
        formatter
            .debug_struct("Memoized")
            .field("hits", &hits)
            .field("misses", &misses)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "async")]
pub use self::asynchronous::{AsyncMemoized, memoize_async, memoize_async_by};

#[cfg(feature = "async")]
mod asynchronous {
    use std::future::Future;
    use std::hash::Hash;
    use std::marker::PhantomData;

    use super::{MemoCache, MemoizeConfig};

    /// An async function whose completed results are cached by key.
    ///
    /// Only finished outputs enter the cache. Calls that overlap before the
    /// first one completes each run the function.
    pub struct AsyncMemoized<A, K, R, F, KF> {
        function: F,
        key_function: KF,
        cache: MemoCache<K, R>,
        _marker: PhantomData<fn(A) -> R>,
    }

    /// Memoizes an async `function`, keyed by its argument.
    pub fn memoize_async<A, R, F, Fut>(function: F) -> AsyncMemoized<A, A, R, F, fn(&A) -> A>
    where
        A: Clone + Hash + Eq,
        R: Clone,
        F: Fn(A) -> Fut,
        Fut: Future<Output = R>,
    {
        memoize_async_by(function, <A as Clone>::clone as fn(&A) -> A)
    }

    /// Memoizes an async `function`, keyed by `key_function(&argument)`.
    pub fn memoize_async_by<A, K, R, F, Fut, KF>(
        function: F,
        key_function: KF,
    ) -> AsyncMemoized<A, K, R, F, KF>
    where
        K: Hash + Eq,
        R: Clone,
        F: Fn(A) -> Fut,
        Fut: Future<Output = R>,
        KF: Fn(&A) -> K,
    {
        AsyncMemoized {
            function,
            key_function,
            cache: MemoCache::new(MemoizeConfig::default()),
            _marker: PhantomData,
        }
    }

    impl<A, K, R, F, Fut, KF> AsyncMemoized<A, K, R, F, KF>
    where
        K: Hash + Eq,
        R: Clone,
        F: Fn(A) -> Fut,
        Fut: Future<Output = R>,
        KF: Fn(&A) -> K,
    {
        /// Replaces the cache with one built from `config`.
        #[must_use]
        pub fn with_config(mut self, config: MemoizeConfig) -> Self {
            self.cache = MemoCache::new(config);
            self
        }

        /// Returns the cached result for `argument`, awaiting the function on a miss.
        pub async fn call(&self, argument: A) -> R {
            let key = (self.key_function)(&argument);
            if let Some(cached) = self.cache.lookup(&key) {
                return cached;
            }
            let result = (self.function)(argument).await;
            self.cache.store(key, result.clone());
            result
        }

        /// Number of cache hits so far.
        pub fn hits(&self) -> u64 {
            self.cache.stats().0
        }

        /// Number of cache misses so far.
        pub fn misses(&self) -> u64 {
            self.cache.stats().1
        }

        /// Number of cached entries.
        pub fn len(&self) -> usize {
            self.cache.len()
        }

        /// Returns `true` when nothing is cached.
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }
}
