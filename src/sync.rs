//! Component C: the sync/idle codeword detector.
//!
//! Grounded on the source's `is_sync()`/`is_idle()`: plain equality
//! checks against the reserved codewords, evaluated on the raw 32-bit
//! window *before* BCH repair.

use crate::constants::{POCSAG_IDLE, POCSAG_IDLE_ALT, POCSAG_SYNC};

/// `true` iff `window` is exactly the batch sync codeword.
pub fn is_sync(window: u32) -> bool {
    window == POCSAG_SYNC
}

/// `true` iff `window` is one of the two codewords accepted as idle.
pub fn is_idle(window: u32) -> bool {
    window == POCSAG_IDLE || window == POCSAG_IDLE_ALT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_sync() {
        assert!(is_sync(POCSAG_SYNC));
        assert!(!is_sync(POCSAG_IDLE));
    }

    #[test]
    fn recognizes_both_idle_codewords() {
        assert!(is_idle(POCSAG_IDLE));
        assert!(is_idle(POCSAG_IDLE_ALT));
        assert!(!is_idle(POCSAG_SYNC));
    }

    #[test]
    fn sync_is_checked_before_repair_would_apply() {
        // A single bit error in the sync word must not be recognized as
        // sync; sync matching happens on the raw window.
        let corrupted = POCSAG_SYNC ^ 1;
        assert!(!is_sync(corrupted));
    }
}
