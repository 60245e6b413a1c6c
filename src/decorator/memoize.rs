//! Memoization by argument.
//!
//! [`memoize`] caches results keyed by the argument itself;
//! [`memoize_by`] derives the key from the argument with a caller-supplied
//! function, which is how multi-argument functions get a deterministic
//! composite key.
//!
//! Cache lookups distinguish "not computed" from the stored value, so a
//! cached `false`, `0`, or empty string is a hit like any other value.
//!
//! # Hashers
//!
//! With the `fxhash` feature the cache uses `rustc-hash`; with `ahash` it
//! uses `ahash`. Otherwise it uses the standard library's `RandomState`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// The hasher used by memoization caches.
#[cfg(feature = "fxhash")]
pub type CacheHasher = rustc_hash::FxBuildHasher;

/// The hasher used by memoization caches.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type CacheHasher = ahash::RandomState;

/// The hasher used by memoization caches.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type CacheHasher = std::collections::hash_map::RandomState;

type Cache<K, R> = RefCell<HashMap<K, R, CacheHasher>>;

fn empty_cache<K, R>() -> Cache<K, R> {
    RefCell::new(HashMap::with_hasher(CacheHasher::default()))
}

/// Looks `key` up in `cache`, computing and storing the result on a miss.
///
/// No borrow of the cache is held while `compute` runs, so the wrapped
/// function may call back into the same wrapper.
fn lookup_or_compute<K, R>(cache: &Cache<K, R>, key: K, compute: impl FnOnce(&K) -> R) -> R
where
    K: Hash + Eq,
    R: Clone,
{
    if let Some(hit) = cache.borrow().get(&key) {
        return hit.clone();
    }
    tracing::trace!("memoize: cache miss");
    let result = compute(&key);
    cache.borrow_mut().entry(key).or_insert(result).clone()
}

/// A function wrapper that caches results by argument.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use underbar::decorator::memoize;
///
/// let calls = Cell::new(0);
/// let is_even = memoize(|number: &u64| {
///     calls.set(calls.get() + 1);
///     number % 2 == 0
/// });
///
/// assert!(!is_even.call(3));
/// assert!(!is_even.call(3));
/// assert_eq!(calls.get(), 1);
/// ```
pub struct Memoize<F, K, R> {
    function: F,
    cache: Cache<K, R>,
}

/// Wraps `function` so that each distinct argument is computed once.
#[inline]
pub fn memoize<F, K, R>(function: F) -> Memoize<F, K, R>
where
    F: Fn(&K) -> R,
    K: Hash + Eq,
{
    Memoize {
        function,
        cache: empty_cache(),
    }
}

impl<F, K, R> Memoize<F, K, R>
where
    F: Fn(&K) -> R,
    K: Hash + Eq,
    R: Clone,
{
    /// Returns the result for `argument`, computing it on the first request.
    pub fn call(&self, argument: K) -> R {
        lookup_or_compute(&self.cache, argument, |key| (self.function)(key))
    }
}

/// A function wrapper that caches results by a key derived from the
/// argument.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::memoize_by;
///
/// let area = memoize_by(
///     |&(width, height): &(u32, u32)| width * height,
///     |&(width, height): &(u32, u32)| (width, height),
/// );
/// assert_eq!(area.call((3, 4)), 12);
/// assert_eq!(area.len(), 1);
/// ```
pub struct MemoizeBy<F, H, A, K, R> {
    function: F,
    key: H,
    cache: Cache<K, R>,
    arguments: PhantomData<fn(&A)>,
}

/// Wraps `function`, caching by `key(argument)`.
///
/// The key function must be deterministic: equal arguments must produce
/// equal keys.
#[inline]
pub fn memoize_by<F, H, A, K, R>(function: F, key: H) -> MemoizeBy<F, H, A, K, R>
where
    F: Fn(&A) -> R,
    H: Fn(&A) -> K,
    K: Hash + Eq,
{
    MemoizeBy {
        function,
        key,
        cache: empty_cache(),
        arguments: PhantomData,
    }
}

impl<F, H, A, K, R> MemoizeBy<F, H, A, K, R>
where
    F: Fn(&A) -> R,
    H: Fn(&A) -> K,
    K: Hash + Eq,
    R: Clone,
{
    /// Returns the result for `arguments`, computing it on the first
    /// request for its key.
    pub fn call(&self, arguments: A) -> R {
        let key = (self.key)(&arguments);
        lookup_or_compute(&self.cache, key, |_| (self.function)(&arguments))
    }
}

macro_rules! cache_inspection {
    ($wrapper:ident < $($parameter:ident),* >) => {
        impl<$($parameter),*> $wrapper<$($parameter),*> {
            /// Returns the number of cached results.
            pub fn len(&self) -> usize {
                self.cache.borrow().len()
            }

            /// Returns `true` if nothing has been cached yet.
            pub fn is_empty(&self) -> bool {
                self.cache.borrow().is_empty()
            }
        }
    };
}

cache_inspection!(Memoize<F, K, R>);
cache_inspection!(MemoizeBy<F, H, A, K, R>);

impl<F, K: Hash + Eq, R> Memoize<F, K, R> {
    /// Returns `true` if a result for `argument` is cached.
    pub fn is_cached(&self, argument: &K) -> bool {
        self.cache.borrow().contains_key(argument)
    }
}
