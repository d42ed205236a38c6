#![forbid(unsafe_code)]

//! Text measurement collaborators.
//!
//! Hit-testing needs the rendered width of a line, which only the host's
//! font machinery truly knows. [`TextMeasurer`] is that seam: stateless,
//! side-effect free, and allowed to fail (a `None` measurement degrades to
//! a missed hit, never an error).
//!
//! [`DisplayWidthMeasurer`] is the bundled implementation for monospaced
//! contexts: Unicode display width times a per-cell pixel scale.
//! [`WidthCache`] memoizes any measurer with an LRU keyed by string hash,
//! since measurement sits on the pointer-event hot path.

use std::cell::RefCell;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use lru::LruCache;
use rustc_hash::FxHasher;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Default cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// The host's text-measurement interface.
///
/// `measure_width` returns the rendered width of `text` in pixels, or
/// `None` when the host cannot measure (missing font context, teardown).
pub trait TextMeasurer {
    /// Measure the rendered width of a single line of text.
    fn measure_width(&self, text: &str) -> Option<u16>;

    /// The host's line height in pixels, when known.
    fn line_height(&self) -> Option<u16> {
        None
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure_width(&self, text: &str) -> Option<u16> {
        (**self).measure_width(text)
    }

    fn line_height(&self) -> Option<u16> {
        (**self).line_height()
    }
}

/// Measurer backed by Unicode display width.
///
/// Suitable when every glyph renders at a fixed advance: the width of a
/// line is the sum of its graphemes' display widths times `px_per_cell`.
#[derive(Debug, Clone, Copy)]
pub struct DisplayWidthMeasurer {
    px_per_cell: u16,
    line_height_px: u16,
}

impl DisplayWidthMeasurer {
    /// Create a measurer with the given horizontal advance per cell.
    ///
    /// Line height defaults to twice the cell advance.
    #[must_use]
    pub const fn new(px_per_cell: u16) -> Self {
        Self {
            px_per_cell,
            line_height_px: px_per_cell.saturating_mul(2),
        }
    }

    /// Override the reported line height.
    #[must_use]
    pub const fn with_line_height(mut self, px: u16) -> Self {
        self.line_height_px = px;
        self
    }
}

impl TextMeasurer for DisplayWidthMeasurer {
    fn measure_width(&self, text: &str) -> Option<u16> {
        let cells: usize = text
            .graphemes(true)
            .map(|g| UnicodeWidthStr::width(g))
            .sum();
        let px = cells.saturating_mul(self.px_per_cell as usize);
        Some(px.min(u16::MAX as usize) as u16)
    }

    fn line_height(&self) -> Option<u16> {
        Some(self.line_height_px)
    }
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeasureCacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    /// Maximum capacity.
    pub capacity: usize,
}

impl MeasureCacheStats {
    /// Calculate hit rate (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

struct CacheState {
    cache: LruCache<u64, Option<u16>>,
    hits: u64,
    misses: u64,
}

/// LRU memoization over another measurer.
///
/// Keys are 64-bit FxHash values of the measured string rather than the
/// string itself, trading theoretical collision safety for memory. Failed
/// measurements are cached too so a flapping host is not re-queried per
/// event.
///
/// Interior mutability keeps the [`TextMeasurer`] contract (`&self`); the
/// cache is not thread-safe.
pub struct WidthCache<M> {
    inner: M,
    state: RefCell<CacheState>,
}

impl<M: TextMeasurer> WidthCache<M> {
    /// Wrap a measurer with the default capacity.
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self::with_capacity(inner, DEFAULT_CACHE_CAPACITY)
    }

    /// Wrap a measurer with an explicit capacity (minimum 1).
    #[must_use]
    pub fn with_capacity(inner: M, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            state: RefCell::new(CacheState {
                cache: LruCache::new(capacity),
                hits: 0,
                misses: 0,
            }),
        }
    }

    /// Current cache statistics.
    #[must_use]
    pub fn stats(&self) -> MeasureCacheStats {
        let state = self.state.borrow();
        MeasureCacheStats {
            hits: state.hits,
            misses: state.misses,
            size: state.cache.len(),
            capacity: state.cache.cap().get(),
        }
    }

    /// Drop all cached measurements, keeping statistics.
    pub fn clear(&self) {
        self.state.borrow_mut().cache.clear();
    }

    fn key(text: &str) -> u64 {
        let mut hasher = FxHasher::default();
        text.hash(&mut hasher);
        hasher.finish()
    }
}

impl<M: TextMeasurer> TextMeasurer for WidthCache<M> {
    fn measure_width(&self, text: &str) -> Option<u16> {
        let key = Self::key(text);
        let mut state = self.state.borrow_mut();
        if let Some(&width) = state.cache.get(&key) {
            state.hits += 1;
            return width;
        }
        state.misses += 1;
        let width = self.inner.measure_width(text);
        state.cache.put(key, width);
        width
    }

    fn line_height(&self) -> Option<u16> {
        self.inner.line_height()
    }
}
