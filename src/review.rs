// SPDX-License-Identifier: GPL-3.0-only

//! Review-prompt counter service
//!
//! Counts filter-change events across sessions and fires a callback the
//! moment the running count reaches the threshold. Counts already past the
//! threshold never re-fire, so a resumed session does not prompt again.
//! Persistence is the caller's job (see [`crate::config::Config`]).

use crate::constants::REVIEW_THRESHOLD;

/// Counter for filter-change events with a threshold-crossing callback
pub struct FilterUsageCounter {
    count: u32,
    threshold: u32,
    on_cross: Option<Box<dyn FnMut(u32)>>,
}

impl std::fmt::Debug for FilterUsageCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterUsageCounter")
            .field("count", &self.count)
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl Default for FilterUsageCounter {
    fn default() -> Self {
        Self::new(REVIEW_THRESHOLD)
    }
}

impl FilterUsageCounter {
    /// Create a fresh counter
    pub fn new(threshold: u32) -> Self {
        Self::resume(0, threshold)
    }

    /// Resume from a persisted count
    pub fn resume(count: u32, threshold: u32) -> Self {
        Self {
            count,
            threshold,
            on_cross: None,
        }
    }

    /// Register the callback fired when the count reaches the threshold
    pub fn on_threshold_cross(mut self, callback: impl FnMut(u32) + 'static) -> Self {
        self.on_cross = Some(Box::new(callback));
        self
    }

    /// Current count
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Record one filter change and return the new count
    ///
    /// Fires the callback exactly when the count becomes equal to the
    /// threshold, once per crossing.
    pub fn increment(&mut self) -> u32 {
        self.count += 1;
        if self.count == self.threshold {
            if let Some(callback) = self.on_cross.as_mut() {
                callback(self.count);
            }
        }
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_counter(count: u32, threshold: u32) -> (FilterUsageCounter, Rc<RefCell<Vec<u32>>>) {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let fired_clone = Rc::clone(&fired);
        let counter = FilterUsageCounter::resume(count, threshold)
            .on_threshold_cross(move |n| fired_clone.borrow_mut().push(n));
        (counter, fired)
    }

    #[test]
    fn test_fires_once_at_threshold() {
        let (mut counter, fired) = recording_counter(4, 5);

        assert_eq!(counter.increment(), 5);
        assert_eq!(*fired.borrow(), vec![5]);

        assert_eq!(counter.increment(), 6);
        assert_eq!(*fired.borrow(), vec![5], "count past threshold must not re-fire");
    }

    #[test]
    fn test_resumed_past_threshold_never_fires() {
        let (mut counter, fired) = recording_counter(7, 5);
        counter.increment();
        counter.increment();
        assert!(fired.borrow().is_empty());
    }

    #[test]
    fn test_counts_without_callback() {
        let mut counter = FilterUsageCounter::new(5);
        for _ in 0..6 {
            counter.increment();
        }
        assert_eq!(counter.count(), 6);
    }
}
