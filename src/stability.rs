//! Sliding-window debouncer for noisy per-frame classifications.
//!
//! Webcam classifications flicker frame to frame. A value is only accepted
//! once it has been observed unanimously across the whole window: a single
//! dissenting frame anywhere voids the confirmation, so accepting a value
//! always requires a fresh unbroken run of identical observations. That
//! trades latency for precision, which suits discrete turn-based input.

use std::collections::VecDeque;

/// Debouncer generic over the classification type
pub struct StabilityFilter<T> {
    capacity: usize,
    window: VecDeque<T>,
    confirmed: Option<T>,
    eligible: fn(&T) -> bool,
}

impl<T: Clone + PartialEq> StabilityFilter<T> {
    /// Create a filter confirming after `capacity` unanimous observations
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_eligibility(capacity, |_| true)
    }

    /// Create a filter that additionally refuses to confirm values failing
    /// the predicate (used to keep classifier sentinels out of the confirmed
    /// state)
    #[must_use]
    pub fn with_eligibility(capacity: usize, eligible: fn(&T) -> bool) -> Self {
        Self {
            capacity,
            window: VecDeque::with_capacity(capacity),
            confirmed: None,
            eligible,
        }
    }

    /// Record one raw observation and re-evaluate the confirmed value.
    ///
    /// The confirmed value is only re-evaluated once the window has filled;
    /// until then it is left untouched.
    pub fn observe(&mut self, raw: T) -> Option<&T> {
        if self.window.len() >= self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(raw.clone());

        if self.window.len() >= self.capacity {
            let unanimous = self.window.iter().all(|seen| *seen == raw);
            if unanimous && (self.eligible)(&raw) {
                self.confirmed = Some(raw);
            } else {
                self.confirmed = None;
            }
        }

        self.confirmed.as_ref()
    }

    /// The currently confirmed value, if any
    #[must_use]
    pub fn confirmed(&self) -> Option<&T> {
        self.confirmed.as_ref()
    }

    /// Drop all history and the confirmed value
    pub fn reset(&mut self) {
        self.window.clear();
        self.confirmed = None;
    }

    /// Window capacity (confirmation threshold)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
