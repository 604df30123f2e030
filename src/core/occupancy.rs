//! Per-byte occupancy bitmap for the memory pool
//!
//! Each bit marks one pool byte as belonging to a live allocation. Bits are
//! MSB-first: byte offset 0 is the most significant bit of word 0, with
//! offsets increasing toward lower significance and higher word indices.

use crate::config::CFG_POOL_SIZE;

/// Number of words needed for the occupancy bitmap
const MAP_WORDS: usize = (CFG_POOL_SIZE + 31) / 32;

/// Occupancy bitmap
pub struct OccupancyMap {
    bitmap: [u32; MAP_WORDS],
}

impl OccupancyMap {
    pub const fn new() -> Self {
        OccupancyMap {
            bitmap: [0; MAP_WORDS],
        }
    }

    pub fn init(&mut self) {
        for word in self.bitmap.iter_mut() {
            *word = 0;
        }
    }

    #[inline(always)]
    fn locate(offset: usize) -> (usize, u32) {
        (offset / 32, 1 << (31 - (offset % 32)))
    }

    /// Mark a byte occupied
    #[inline]
    pub fn insert(&mut self, offset: usize) {
        debug_assert!(offset < CFG_POOL_SIZE);

        let (word_idx, mask) = Self::locate(offset);
        self.bitmap[word_idx] |= mask;
    }

    /// Mark a byte free
    #[inline]
    pub fn remove(&mut self, offset: usize) {
        debug_assert!(offset < CFG_POOL_SIZE);

        let (word_idx, mask) = Self::locate(offset);
        self.bitmap[word_idx] &= !mask;
    }

    /// Check whether a byte is occupied
    #[inline]
    pub fn is_set(&self, offset: usize) -> bool {
        if offset >= CFG_POOL_SIZE {
            return false;
        }
        let (word_idx, mask) = Self::locate(offset);
        self.bitmap[word_idx] & mask != 0
    }

    /// Check that every byte in `[start, start + len)` is free
    ///
    /// Stops at the first occupied byte.
    pub fn is_range_clear(&self, start: usize, len: usize) -> bool {
        let end = start.saturating_add(len);
        if end > CFG_POOL_SIZE {
            return false;
        }
        (start..end).all(|offset| !self.is_set(offset))
    }

    /// Mark `[start, start + len)` occupied, clamped to the map end
    pub fn set_range(&mut self, start: usize, len: usize) {
        let end = start.saturating_add(len).min(CFG_POOL_SIZE);
        for offset in start..end {
            self.insert(offset);
        }
    }

    /// Mark `[start, start + len)` free, clamped to the map end
    pub fn clear_range(&mut self, start: usize, len: usize) {
        let end = start.saturating_add(len).min(CFG_POOL_SIZE);
        for offset in start..end {
            self.remove(offset);
        }
    }

    /// Number of occupied bytes
    pub fn count_set(&self) -> usize {
        self.bitmap.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Check if no byte is occupied
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bitmap.iter().all(|&w| w == 0)
    }
}

impl Default for OccupancyMap {
    fn default() -> Self {
        Self::new()
    }
}
