//! Peak heap accounting for measuring one solve call.
//!
//! [`PeakAlloc`] wraps the system allocator and tracks live and peak bytes.
//! A binary installs it with `#[global_allocator]`; the library never does.
//! Process RSS cannot stand in for this: the strategy's table or cache is
//! freed before the call returns, and freed pages are rarely handed back to
//! the OS, so an RSS difference taken around the call usually reads zero.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counting allocator: live bytes and the high-water mark since the last
/// [`reset_peak`](Self::reset_peak).
#[derive(Debug)]
pub struct PeakAlloc {
    current: AtomicUsize,
    peak: AtomicUsize,
}

impl PeakAlloc {
    pub const fn new() -> Self {
        Self {
            current: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    pub fn current_bytes(&self) -> usize {
        self.current.load(Ordering::Relaxed)
    }

    pub fn peak_bytes(&self) -> usize {
        self.peak.load(Ordering::Relaxed)
    }

    /// Lower the high-water mark to what is live right now.
    pub fn reset_peak(&self) {
        self.peak.store(self.current_bytes(), Ordering::Relaxed);
    }

    /// Run `f` and return its result with the peak bytes allocated on top of
    /// what was live when it started.
    ///
    /// Allocations made by other threads during `f` are counted too.
    pub fn measure<R>(&self, f: impl FnOnce() -> R) -> (R, usize) {
        let baseline = self.current_bytes();
        self.reset_peak();
        let result = f();
        let peak = self.peak_bytes().saturating_sub(baseline);
        (result, peak)
    }

    fn record_alloc(&self, size: usize) {
        let now = self.current.fetch_add(size, Ordering::Relaxed) + size;
        self.peak.fetch_max(now, Ordering::Relaxed);
    }

    fn record_dealloc(&self, size: usize) {
        self.current.fetch_sub(size, Ordering::Relaxed);
    }
}

impl Default for PeakAlloc {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl GlobalAlloc for PeakAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            self.record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            self.record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        self.record_dealloc(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            // old block first, so a shrink never raises the peak
            self.record_dealloc(layout.size());
            self.record_alloc(new_size);
        }
        new_ptr
    }
}

/// Bytes to KiB, rounded up so any allocation shows as at least 1.
pub fn to_kib(bytes: usize) -> u64 {
    (bytes as u64).div_ceil(1024)
}
